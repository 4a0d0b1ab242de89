// Text-Generation Adapter
// Implements: summary, job description, and skills-list generation.
// All provider calls go through llm_client, never direct HTTP calls here.

pub mod generator;
pub mod prompts;
pub mod skills;

pub use generator::{GenerationError, TextGenerator};
