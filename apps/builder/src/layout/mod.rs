// Page layout for the exported document.
// Implements: font metrics for line wrapping, cursor-based flow with pagination.
// Pure CPU work; callers run it inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;

// Re-export the public API consumed by the exporter.
pub use flow::{LaidOutPage, PageFlow, TextStyle};
pub use font_metrics::{default_page_layout, FontFace, PageLayout};
