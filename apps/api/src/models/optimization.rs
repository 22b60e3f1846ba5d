use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TONE: &str = "formal";
pub const DEFAULT_STYLE: &str = "concise";

/// Body of `POST /api/optimize`.
///
/// Every field stays untyped so a value of the wrong type reaches validation
/// instead of failing deserialization of the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizationRequest {
    #[serde(default)]
    pub resume: Option<Value>,
    #[serde(default, rename = "jobDesc")]
    pub job_description: Option<Value>,
    #[serde(default)]
    pub tone: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
}

/// The model's rewrite. Values are passed through untouched, so a non-string
/// field from the model propagates as-is and a missing one comes back `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    #[serde(default)]
    pub resume: Value,
    #[serde(default, rename = "coverLetter")]
    pub cover_letter: Value,
}

impl OptimizationResult {
    /// Degraded result used when the reply is not the two-field object:
    /// the whole reply becomes the résumé and the cover letter is empty.
    pub fn fallback(raw: &str) -> Self {
        Self {
            resume: Value::String(raw.to_string()),
            cover_letter: Value::String(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_uses_wire_field_names() {
        let request: OptimizationRequest = serde_json::from_value(json!({
            "resume": "Engineer",
            "jobDesc": "Rust role",
            "tone": "friendly"
        }))
        .unwrap();
        assert_eq!(request.resume, Some(json!("Engineer")));
        assert_eq!(request.job_description, Some(json!("Rust role")));
        assert_eq!(request.tone, Some(json!("friendly")));
        assert!(request.style.is_none());
    }

    #[test]
    fn test_request_accepts_non_string_tone_and_style() {
        let request: OptimizationRequest = serde_json::from_value(json!({
            "resume": "Engineer",
            "tone": 5,
            "style": null
        }))
        .unwrap();
        assert_eq!(request.tone, Some(json!(5)));
        assert!(request.style.is_none());
    }

    #[test]
    fn test_request_accepts_non_string_resume_for_later_validation() {
        let request: OptimizationRequest =
            serde_json::from_value(json!({ "resume": 42 })).unwrap();
        assert_eq!(request.resume, Some(json!(42)));
    }

    #[test]
    fn test_result_serializes_cover_letter_in_camel_case() {
        let result = OptimizationResult {
            resume: json!("A"),
            cover_letter: json!("B"),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "resume": "A", "coverLetter": "B" })
        );
    }

    #[test]
    fn test_fallback_puts_everything_in_resume() {
        let result = OptimizationResult::fallback("plain text reply");
        assert_eq!(result.resume, json!("plain text reply"));
        assert_eq!(result.cover_letter, json!(""));
    }
}
