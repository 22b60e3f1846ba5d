//! Prompt Service: turns an `OptimizationRequest` into an `OptimizationResult`.
//!
//! Flow: validate → configuration check → build prompt → one generator call → parse reply.
//! There is no retry. A reply that is not the expected JSON object is not an error:
//! it comes back whole in `resume` with an empty cover letter.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::CAREER_ASSISTANT_SYSTEM;
use crate::llm_client::TextGenerator;
use crate::models::optimization::{
    OptimizationRequest, OptimizationResult, DEFAULT_STYLE, DEFAULT_TONE,
};
use crate::optimize::prompts::{
    tone_and_style, COVER_LETTER_INSTRUCTIONS, GENERIC_ROLE, JOB_HEADER, JSON_FORMAT_DIRECTIVE,
    PREAMBLE, RESUME_HEADER, REWRITE_INSTRUCTIONS,
};

pub const RESUME_REQUIRED: &str = "A résumé is required.";
pub const NOT_CONFIGURED: &str = "OpenAI is not configured. Please set OPENAI_API_KEY.";
pub const GENERATION_FAILED: &str = "Failed to generate resume and cover letter.";

/// A request that passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub resume: String,
    pub job_description: String,
    pub tone: String,
    pub style: String,
}

/// Rejects a missing, non-string or blank résumé. Other fields never fail validation.
pub fn validate(request: OptimizationRequest) -> Result<ValidatedRequest, AppError> {
    let resume = match request.resume {
        Some(Value::String(resume)) if !resume.trim().is_empty() => resume,
        _ => return Err(AppError::Validation(RESUME_REQUIRED.to_string())),
    };

    Ok(ValidatedRequest {
        resume,
        job_description: field_text(request.job_description, ""),
        tone: field_text(request.tone, DEFAULT_TONE),
        style: field_text(request.style, DEFAULT_STYLE),
    })
}

/// Text for an optional field: strings as-is, absent or `null` the default,
/// any other value as its JSON text.
fn field_text(value: Option<Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text,
        None | Some(Value::Null) => default.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Builds the user prompt. Pure: the same request always yields the same text.
/// The résumé and job description are inserted verbatim, untrimmed.
pub fn build_prompt(request: &ValidatedRequest) -> String {
    let mut prompt = String::with_capacity(
        request.resume.len() + request.job_description.len() + 1024,
    );

    prompt.push_str(PREAMBLE);
    prompt.push_str(RESUME_HEADER);
    prompt.push_str(&request.resume);
    prompt.push_str("\n\n");

    if request.job_description.trim().is_empty() {
        prompt.push_str(GENERIC_ROLE);
    } else {
        prompt.push_str(JOB_HEADER);
        prompt.push_str(&request.job_description);
        prompt.push_str("\n\n");
    }

    prompt.push_str(REWRITE_INSTRUCTIONS);
    prompt.push_str(COVER_LETTER_INSTRUCTIONS);
    prompt.push_str(&tone_and_style(&request.tone, &request.style));
    prompt.push_str(JSON_FORMAT_DIRECTIVE);
    prompt
}

/// Reads the model reply as strict JSON after trimming.
///
/// Only a JSON object is read as the two-field structure; anything else
/// (plain text, an array, a bare string) becomes the fallback result.
pub fn parse_reply(raw: &str) -> OptimizationResult {
    let text = raw.trim();

    match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => match serde_json::from_value(value) {
            Ok(result) => result,
            Err(_) => OptimizationResult::fallback(text),
        },
        Ok(_) | Err(_) => {
            warn!(
                "Model reply was not a JSON object, returning it as plain résumé text ({} chars)",
                text.len()
            );
            OptimizationResult::fallback(text)
        }
    }
}

/// Runs one optimization end to end.
pub async fn optimize(
    generator: &dyn TextGenerator,
    request: OptimizationRequest,
) -> Result<OptimizationResult, AppError> {
    let request = validate(request)?;

    if !generator.is_configured() {
        return Err(AppError::Configuration(NOT_CONFIGURED.to_string()));
    }

    let prompt = build_prompt(&request);
    info!(
        "Optimizing résumé ({} chars, job description: {}, tone={}, style={}) with {}",
        request.resume.len(),
        !request.job_description.trim().is_empty(),
        request.tone,
        request.style,
        generator.model()
    );

    let reply = generator
        .complete(CAREER_ASSISTANT_SYSTEM, &prompt)
        .await
        .map_err(|e| {
            error!("OpenAI API error: {e}");
            AppError::Upstream(GENERATION_FAILED.to_string())
        })?;

    Ok(parse_reply(&reply))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
