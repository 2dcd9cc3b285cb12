//! Helpers for pulling JSON out of free-form model output and chat payloads.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json[ \t]*\r?\n(.*?)\r?\n[ \t]*```").expect("fenced JSON pattern is valid")
});

#[derive(Debug, Error)]
pub enum JsonExtractError {
    #[error("Invalid JSON payload: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("Invalid JSON payload: unmatched braces")]
    UnmatchedBraces,
}

/// Returns the body of the first ```` ```json ```` fenced block, if any.
pub fn fenced_json_block(text: &str) -> Option<&str> {
    FENCED_JSON
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Returns the slice from the first `{` to the last `}`.
pub fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Best-effort JSON text: fenced block, then brace span, then the trimmed input.
pub fn extract_json_text(text: &str) -> &str {
    fenced_json_block(text)
        .or_else(|| brace_span(text))
        .unwrap_or(text)
        .trim()
}

/// Finds the first top-level JSON object by brace depth, skipping braces
/// inside string literals. Returns `Ok(None)` when there is no `{` at all.
pub fn balanced_object(text: &str) -> Result<Option<&str>, JsonExtractError> {
    let Some(start) = text.find('{') else {
        return Ok(None);
    };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Ok(Some(&text[start..end]));
                }
            }
            _ => {}
        }
    }

    Err(JsonExtractError::UnmatchedBraces)
}

/// Parses the JSON object carried in a chat command payload.
pub fn extract_json_payload(payload: &str) -> Result<Value, JsonExtractError> {
    if let Some(block) = fenced_json_block(payload) {
        return Ok(serde_json::from_str(block)?);
    }

    match balanced_object(payload)? {
        Some(object) => Ok(serde_json::from_str(object)?),
        None => Ok(serde_json::from_str(payload.trim())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_is_extracted() {
        let text = "Here you go:\n```json\n{\"atsScore\": 80}\n```\nThanks";
        assert_eq!(fenced_json_block(text), Some("{\"atsScore\": 80}"));
    }

    #[test]
    fn test_fenced_block_missing_returns_none() {
        assert_eq!(fenced_json_block("```\n{}\n```"), None);
        assert_eq!(fenced_json_block("plain text"), None);
    }

    #[test]
    fn test_brace_span_trims_surrounding_prose() {
        let text = "Sure! {\"title\": \"Rust\"} Hope that helps.";
        assert_eq!(brace_span(text), Some("{\"title\": \"Rust\"}"));
        assert_eq!(brace_span("} no object {"), None);
    }

    #[test]
    fn test_extract_json_text_prefers_fenced_block() {
        let text = "{ignored}\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_text(text), "{\"a\": 1}");
        assert_eq!(extract_json_text("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn test_balanced_object_skips_braces_in_strings() {
        let text = r#"QUESTIONS: {"profile": {"note": "uses { and } \" inside"}, "count": 3} trailing }"#;
        let object = balanced_object(text).unwrap().unwrap();
        let value: Value = serde_json::from_str(object).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["profile"]["note"], "uses { and } \" inside");
    }

    #[test]
    fn test_balanced_object_reports_unmatched_braces() {
        let err = balanced_object(r#"{"count": 3"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON payload: unmatched braces");
    }

    #[test]
    fn test_extract_payload_without_braces_parses_whole_text() {
        assert_eq!(extract_json_payload(" [1,2] ").unwrap(), serde_json::json!([1, 2]));
        assert!(extract_json_payload("not json").is_err());
    }

    #[test]
    fn test_extract_payload_from_fenced_block() {
        let payload = "\n```json\n{\"question\": \"Why Rust?\"}\n```";
        let value = extract_json_payload(payload).unwrap();
        assert_eq!(value["question"], "Why Rust?");
    }
}
