// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System instruction sent with every résumé optimization call.
pub const CAREER_ASSISTANT_SYSTEM: &str =
    "You are a helpful career assistant who improves résumés and writes cover letters.";
