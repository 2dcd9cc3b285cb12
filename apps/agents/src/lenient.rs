//! Forgiving `deserialize_with` helpers for JSON written by an LLM or a loose client.
//!
//! Each helper reads the raw value first and coerces what it can; `null` and
//! wrongly typed values fall back to an empty or absent value rather than failing
//! the enclosing document.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn leading_number(s: &str) -> Option<f64> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_number(s),
        _ => None,
    }
}

/// Accepts a JSON number, a numeric string ("7", "3+"), or anything else as `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Like [`number`] but rounded to a non-negative whole number.
pub fn whole_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(deserializer)?
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round() as u32))
}

/// Whole number where an unusable value reads as zero.
pub fn whole_number_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(whole_number(deserializer)?.unwrap_or(0))
}

/// Positive count given as a number or numeric string. Missing or null keeps the
/// caller's default through `#[serde(default)]`; text that is not a number is an error.
pub fn count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value_to_f64(&value)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| Some(n as usize))
            .ok_or_else(|| D::Error::custom(format!("count must be a number, got {value}"))),
    }
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// String field where scalars are stringified and anything else reads as empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string(deserializer)?.unwrap_or_default())
}

/// Optional string; blank, null or structured values read as `None`.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(value_to_string)
        .filter(|s| !s.trim().is_empty()))
}

/// List of strings. A single string is split on commas; null entries are dropped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(value_to_string)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

/// Text that may arrive as a list; list items are joined with ", ".
pub fn comma_joined<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => value_to_string(other).unwrap_or_default(),
        None => String::new(),
    })
}

/// Positional list of strings: nulls and structured items become empty strings so
/// indexes stay aligned, and a lone string is a one-item list.
pub fn string_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| value_to_string(item).unwrap_or_default())
            .collect(),
        Some(Value::String(s)) => vec![s],
        _ => Vec::new(),
    })
}

/// Sequence of records; items that do not fit `T` are skipped and a non-array reads as empty.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Optional nested record; a value that does not fit `T` reads as `None`.
pub fn optional_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Loose {
        #[serde(deserialize_with = "number")]
        score: Option<f64>,
        #[serde(deserialize_with = "whole_number")]
        percent: Option<u32>,
        #[serde(deserialize_with = "string")]
        title: String,
        #[serde(deserialize_with = "string_list")]
        tags: Vec<String>,
        #[serde(deserialize_with = "count")]
        count: Option<usize>,
        #[serde(deserialize_with = "string_items")]
        answers: Vec<String>,
        #[serde(deserialize_with = "comma_joined")]
        joined: String,
    }

    fn parse(value: Value) -> Loose {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numbers_accept_strings_and_floats() {
        let p = parse(json!({"score": "4+", "percent": 82.5}));
        assert_eq!(p.score, Some(4.0));
        assert_eq!(p.percent, Some(83));

        let p = parse(json!({"score": [1], "percent": -3}));
        assert_eq!(p.score, None);
        assert_eq!(p.percent, None);
    }

    #[test]
    fn test_nulls_read_as_empty() {
        let p = parse(json!({"score": null, "title": null, "tags": null, "count": null}));
        assert_eq!(p.score, None);
        assert_eq!(p.title, "");
        assert!(p.tags.is_empty());
        assert_eq!(p.count, None);
    }

    #[test]
    fn test_string_list_splits_commas_and_drops_nulls() {
        assert_eq!(parse(json!({"tags": "Go, Rust ,"})).tags, vec!["Go", "Rust"]);
        assert_eq!(parse(json!({"tags": ["a", null, 3]})).tags, vec!["a", "3"]);
    }

    #[test]
    fn test_scalar_title_is_stringified() {
        assert_eq!(parse(json!({"title": 42})).title, "42");
        assert_eq!(parse(json!({"title": {"x": 1}})).title, "");
    }

    #[test]
    fn test_count_rejects_words() {
        assert_eq!(parse(json!({"count": "5"})).count, Some(5));
        assert!(serde_json::from_value::<Loose>(json!({"count": "five"})).is_err());
    }

    #[test]
    fn test_string_items_keep_positions() {
        let p = parse(json!({"answers": ["Yes, mostly", null, 7]}));
        assert_eq!(p.answers, vec!["Yes, mostly", "", "7"]);
        assert_eq!(parse(json!({"answers": "Only one"})).answers, vec!["Only one"]);
    }

    #[test]
    fn test_comma_joined_accepts_list_or_text() {
        assert_eq!(parse(json!({"joined": ["Go", "Rust"]})).joined, "Go, Rust");
        assert_eq!(parse(json!({"joined": "Go, Rust"})).joined, "Go, Rust");
        assert_eq!(parse(json!({"joined": null})).joined, "");
    }
}
