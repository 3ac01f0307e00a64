//! Normalization of loosely shaped catalog values.
//!
//! Imported datasets and older admin clients send list fields as real arrays,
//! JSON-encoded strings, Python-style `"['a', 'b']"` strings, comma-separated text
//! or plain scalars. Everything is coerced into `Vec<String>` here, once, before it
//! reaches the database.

use regex::Regex;
use serde_json::Value;

use crate::server::error::AppError;

const QUOTED_ITEM: &str = r#"'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)""#;
const DICT_KEY: &str = r#"'([^']*)'\s*:|"([^"]*)"\s*:"#;
const HTML_TAG: &str = r"<[^>]+>";
const AUDIO_FOOTNOTE: &str = "languages with full audio support";
const MALFORMED_NAME: &str = r#"[\[\]\(\)\{\}'"].*[,\]]"#;

/// Coerces any list-ish value into a list of non-empty strings.
///
/// - Arrays keep their string and number items. String items that themselves
///   look like a bracketed list are expanded.
/// - Strings starting with `[` are parsed as JSON, then as a quoted list, then
///   split on commas with brackets and quotes stripped.
/// - Any other non-empty string becomes a one-element list.
/// - `null` and empty strings become an empty list.
pub fn ensure_array(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .flat_map(|item| match item {
                Value::String(s) if s.trim_start().starts_with('[') => parse_list_string(s),
                Value::String(s) => non_empty(s),
                Value::Number(n) => vec![n.to_string()],
                _ => Vec::new(),
            })
            .collect(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.starts_with('[') {
                parse_list_string(trimmed)
            } else {
                non_empty(trimmed)
            }
        }
        Value::Number(n) => vec![n.to_string()],
        Value::Bool(_) | Value::Object(_) => Vec::new(),
    }
}

/// Extracts tag names.
///
/// Steam datasets store tags as a `{tag: votes}` map, which yields its keys. A
/// stringified map is read with a key pattern. Anything else is treated as a list.
pub fn extract_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map
            .keys()
            .filter(|k| !k.trim().is_empty())
            .map(|k| k.trim().to_string())
            .collect(),
        Value::Array(items) => items.iter().flat_map(extract_tags).collect(),
        Value::String(s) if s.trim_start().starts_with('{') => {
            match serde_json::from_str::<Value>(s) {
                Ok(parsed @ Value::Object(_)) => extract_tags(&parsed),
                _ => dict_keys(s),
            }
        }
        other => ensure_array(other),
    }
}

/// Removes HTML tags and `[b]` markers, then collapses whitespace.
pub fn strip_html(input: &str) -> String {
    let without_tags = match Regex::new(HTML_TAG) {
        Ok(re) => re.replace_all(input, " ").into_owned(),
        Err(_) => input.to_string(),
    };

    without_tags
        .replace("[b]", "")
        .replace("[/b]", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a storefront language string into individual language names.
///
/// Footnote markers (`*`) and the trailing "languages with full audio support"
/// note are dropped.
pub fn split_languages(input: &str) -> Vec<String> {
    let stripped = strip_html(input);
    let text = match stripped.to_lowercase().find(AUDIO_FOOTNOTE) {
        Some(idx) if stripped.is_char_boundary(idx) => &stripped[..idx],
        _ => stripped.as_str(),
    };

    text.split(',')
        .map(|lang| lang.trim().trim_matches('*').trim())
        .filter(|lang| !lang.is_empty())
        .map(String::from)
        .collect()
}

/// Normalizes a raw `supported_languages` value of any shape.
pub fn normalize_languages(value: &Value) -> Vec<String> {
    ensure_array(value)
        .iter()
        .flat_map(|entry| split_languages(entry))
        .collect()
}

/// True when a developer name still carries list syntax from a bad import,
/// for example `"['Valve'"` or `"Valve, 'Hidden Path']"`. A trailing bracket with no
/// opening bracket or quote before it is not flagged.
pub fn is_malformed_name(name: &str) -> bool {
    Regex::new(MALFORMED_NAME)
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

/// Case-insensitive whole-word match of `needle` inside `haystack`.
pub fn contains_word(haystack: &str, needle: &str) -> Result<bool, AppError> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Ok(true);
    }
    let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(needle)))?;
    Ok(re.is_match(haystack))
}

/// Case-insensitive whole-word match against any element of a list.
pub fn any_contains_word(values: &[String], needle: &str) -> Result<bool, AppError> {
    for value in values {
        if contains_word(value, needle)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn non_empty(s: &str) -> Vec<String> {
    let s = s.trim();
    if s.is_empty() {
        Vec::new()
    } else {
        vec![s.to_string()]
    }
}

fn parse_list_string(s: &str) -> Vec<String> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(s) {
        return ensure_array(&Value::Array(items));
    }

    if let Ok(re) = Regex::new(QUOTED_ITEM) {
        let quoted: Vec<String> = re
            .captures_iter(s)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().replace("\\'", "'").replace("\\\"", "\""))
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        if !quoted.is_empty() {
            return quoted;
        }
    }

    s.split(',')
        .map(|item| item.trim_matches(|c: char| "[]'\" ".contains(c)))
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn dict_keys(s: &str) -> Vec<String> {
    let Ok(re) = Regex::new(DICT_KEY) else {
        return Vec::new();
    };
    re.captures_iter(s)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|key| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ensure_array_handles_every_shape() {
        assert_eq!(ensure_array(&json!(["Valve", 7])), vec!["Valve", "7"]);
        assert_eq!(
            ensure_array(&json!("['Valve', 'Hidden Path']")),
            vec!["Valve", "Hidden Path"]
        );
        assert_eq!(
            ensure_array(&json!(r#"["Valve", "Hidden Path"]"#)),
            vec!["Valve", "Hidden Path"]
        );
        assert_eq!(ensure_array(&json!("[Valve, Hidden Path")), vec!["Valve", "Hidden Path"]);
        assert_eq!(ensure_array(&json!(" Valve ")), vec!["Valve"]);
        assert!(ensure_array(&json!("")).is_empty());
        assert!(ensure_array(&Value::Null).is_empty());
        assert_eq!(ensure_array(&json!(["['Valve']"])), vec!["Valve"]);
    }

    #[test]
    fn ensure_array_keeps_escaped_quotes() {
        assert_eq!(
            ensure_array(&json!(r"['Tom\'s Studio', 'Other']")),
            vec!["Tom's Studio", "Other"]
        );
    }

    #[test]
    fn extract_tags_reads_maps_and_strings() {
        assert_eq!(
            extract_tags(&json!({"FPS": 90, "Shooter": 65})),
            vec!["FPS", "Shooter"]
        );
        assert_eq!(
            extract_tags(&json!(["{'FPS': 90, 'Shooter': 65}"])),
            vec!["FPS", "Shooter"]
        );
        assert_eq!(extract_tags(&json!(["Action", "Indie"])), vec!["Action", "Indie"]);
        assert!(extract_tags(&json!({})).is_empty());
    }

    #[test]
    fn strip_html_and_languages() {
        assert_eq!(strip_html("<strong>English</strong>  [b]*[/b]"), "English *");

        let raw = "English<strong>*</strong>, French<br><strong>*</strong>languages with full audio support";
        assert_eq!(split_languages(raw), vec!["English", "French"]);

        assert_eq!(
            normalize_languages(&json!("['English', 'German']")),
            vec!["English", "German"]
        );
    }

    #[test]
    fn malformed_names_are_detected() {
        assert!(is_malformed_name("['Valve'"));
        assert!(is_malformed_name("Valve, 'Hidden Path']"));
        assert!(!is_malformed_name("Valve, Hidden Path]"));
        assert!(is_malformed_name("\"Valve\","));
        assert!(!is_malformed_name("Valve"));
        assert!(!is_malformed_name("Hidden Path Entertainment"));
    }

    #[test]
    fn word_matching_is_case_insensitive() {
        assert!(contains_word("Free to Play", "free").unwrap());
        assert!(!contains_word("Freedom Fighters", "free").unwrap());
        assert!(contains_word("Valve Corporation", "valve").unwrap());
        assert!(any_contains_word(&["Action".to_string(), "Indie".to_string()], "indie").unwrap());
        assert!(!any_contains_word(&[], "indie").unwrap());
    }
}
