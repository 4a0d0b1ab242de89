// Shared prompt fragments.
// Each feature that needs generation keeps its own prompts.rs alongside it.

/// System instruction sent with every request: plain text suitable for pasting
/// straight into a form field.
pub const PLAIN_TEXT_SYSTEM: &str = "You are an experienced resume writer. \
    Respond with the requested text only. \
    Do NOT include a preamble, a closing remark, or explanations. \
    Do NOT wrap the answer in quotes or code fences.";
