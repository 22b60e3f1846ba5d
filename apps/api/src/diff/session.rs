//! Client session state: the free-use flag and the captured original résumé.
//!
//! The browser keeps `freeUsed` in local storage and the original résumé in
//! page memory, and sends both to `POST /api/render` after a successful
//! optimization. The flag is a cosmetic gate only; clearing storage resets it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diff::renderer::{align_words, render_html, DiffToken};
use crate::models::optimization::OptimizationResult;

/// What the page shows after a successful optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    pub resume: String,
    #[serde(rename = "coverLetter")]
    pub cover_letter: String,
    /// Empty when no original résumé was recorded.
    #[serde(rename = "diffHtml")]
    pub diff_html: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    #[serde(default, rename = "freeUsed")]
    pub free_used: bool,
    #[serde(default, rename = "originalResume")]
    pub original_resume: String,
}

impl ClientSession {
    /// Called on every edit of the résumé field; the last value wins.
    pub fn record_original(&mut self, text: impl Into<String>) {
        self.original_resume = text.into();
    }

    /// Aligns `updated` against the recorded original. No tokens if none was recorded.
    pub fn diff_tokens(&self, updated: &str) -> Vec<DiffToken> {
        if self.original_resume.is_empty() {
            Vec::new()
        } else {
            align_words(&self.original_resume, updated)
        }
    }

    pub fn diff_against(&self, updated: &str) -> String {
        render_html(&self.diff_tokens(updated))
    }

    /// Renders a successful result and spends the free use.
    pub fn apply_result(&mut self, result: &OptimizationResult) -> RenderedResult {
        let resume = display_text(&result.resume);
        let cover_letter = display_text(&result.cover_letter);
        let diff_html = self.diff_against(&resume);

        self.free_used = true;

        RenderedResult {
            resume,
            cover_letter,
            diff_html,
        }
    }
}

/// Text shown for a result field: strings as-is, falsy values blank, anything else as JSON.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => other.to_string(),
    }
}
