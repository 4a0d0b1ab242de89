//! Text generation: the single wrapper the editors call to fill fields.
//!
//! Flow per call: precondition check → provider present? → raise pending flag →
//! one provider round trip → trim / parse → lower flag.
//!
//! Every failure is logged and returned as a [`GenerationError`]. Callers
//! treat any error as "no change"; `Busy` tells them another call holds the
//! flag, as opposed to a call that ran and failed.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::generation::prompts::{job_description_prompt, skills_prompt, summary_prompt};
use crate::generation::skills::parse_skill_list;
use crate::llm_client::{LlmError, TextProvider};
use crate::pending::PendingFlag;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0} is empty")]
    MissingInput(&'static str),

    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,

    #[error("another generation is already in progress")]
    Busy,

    #[error("provider call failed: {0}")]
    Provider(#[from] LlmError),

    #[error("provider returned no usable text")]
    EmptyReply,
}

pub struct TextGenerator {
    /// `None` when no provider credential is configured.
    provider: Option<Arc<dyn TextProvider>>,
    generating: PendingFlag,
}

impl TextGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            provider: Some(provider),
            generating: PendingFlag::new(),
        }
    }

    /// A generator without a provider: every call fails fast.
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            generating: PendingFlag::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// True while a provider call is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating.is_active()
    }

    pub async fn generate_summary(&self, job_title: &str) -> Result<String, GenerationError> {
        let job_title = require("summary", "job title", job_title)?;
        self.run("summary", summary_prompt(job_title)).await
    }

    pub async fn generate_job_description(
        &self,
        position: &str,
        company: &str,
    ) -> Result<String, GenerationError> {
        let position = require("job description", "position", position)?;
        let company = require("job description", "company", company)?;
        self.run("job description", job_description_prompt(position, company))
            .await
    }

    pub async fn generate_skills_list(&self, job_title: &str) -> Result<Vec<String>, GenerationError> {
        let job_title = require("skills", "job title", job_title)?;
        let reply = self.run("skills", skills_prompt(job_title)).await?;
        let skills = parse_skill_list(&reply);
        if skills.is_empty() {
            warn!("Skills generation returned no usable labels");
            return Err(GenerationError::EmptyReply);
        }
        Ok(skills)
    }

    async fn run(&self, operation: &str, prompt: String) -> Result<String, GenerationError> {
        let Some(provider) = &self.provider else {
            error!("Cannot generate {operation}: GEMINI_API_KEY is not configured");
            return Err(GenerationError::NotConfigured);
        };

        let Some(_pending) = self.generating.try_begin() else {
            warn!("Cannot generate {operation}: another generation is already in progress");
            return Err(GenerationError::Busy);
        };

        info!("Generating {operation}");
        let text = provider.generate(&prompt).await.map_err(|e| {
            error!("Error generating {operation}: {e}");
            GenerationError::from(e)
        })?;

        let text = text.trim();
        if text.is_empty() {
            warn!("Provider returned an empty {operation}");
            return Err(GenerationError::EmptyReply);
        }
        Ok(text.to_string())
    }
}

/// Trims `value`, logging and failing when nothing is left.
fn require<'a>(
    operation: &str,
    argument: &'static str,
    value: &'a str,
) -> Result<&'a str, GenerationError> {
    let value = value.trim();
    if value.is_empty() {
        warn!("Cannot generate {operation}: {argument} is empty");
        Err(GenerationError::MissingInput(argument))
    } else {
        Ok(value)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
