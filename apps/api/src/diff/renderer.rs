//! Diff Renderer: greedy single-cursor word alignment.
//!
//! This is NOT an LCS or edit-distance diff. One cursor walks the original
//! words; an updated word matching the word under the cursor is plain and
//! advances it, anything else is marked changed and leaves it where it is.
//! An insertion early in the updated text therefore marks everything after it.
//! That output is the contract; do not swap in a better algorithm.

use serde::Serialize;

/// One word of the updated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffToken {
    pub text: String,
    pub changed: bool,
}

/// Aligns `updated` against `original`, word by word.
pub fn align_words(original: &str, updated: &str) -> Vec<DiffToken> {
    let original_words: Vec<&str> = original.split_whitespace().collect();
    let mut j = 0;

    updated
        .split_whitespace()
        .map(|word| {
            let matched = original_words.get(j) == Some(&word);
            if matched {
                j += 1;
            }
            DiffToken {
                text: word.to_string(),
                changed: !matched,
            }
        })
        .collect()
}

/// Escapes `& < > " '` for safe insertion into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Joins tokens with single spaces, wrapping changed words in `<mark>`.
/// Every word is escaped first, changed or not.
pub fn render_html(tokens: &[DiffToken]) -> String {
    tokens
        .iter()
        .map(|token| {
            let word = escape_html(&token.text);
            if token.changed {
                format!("<mark>{word}</mark>")
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
