use serde_json::Value;
use std::collections::HashMap;
use tera::{Result as TeraResult, to_value};

use crate::view::truncate::{DEFAULT_TRUNCATE_CHARS, truncate};

/// Word-boundary truncation, e.g. `{{ title | truncate_text(chars=40) }}`
pub fn truncate_text(value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("truncate_text filter expects a string"))?;

    let chars = match args.get("chars") {
        Some(n) => n
            .as_u64()
            .ok_or_else(|| tera::Error::msg("truncate_text 'chars' must be a positive integer"))?
            as usize,
        None => DEFAULT_TRUNCATE_CHARS,
    };

    to_value(truncate(text, chars))
        .map_err(|e| tera::Error::msg(format!("Failed to convert to value: {}", e)))
}

/// JSON for embedding inside `<script>`: `{{ rows | json_script | safe }}`
///
/// Characters that could close the script element or break a JS string
/// literal are written as `\uXXXX` escapes.
pub fn json_script(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
    let json = serde_json::to_string(value)
        .map_err(|e| tera::Error::msg(format!("Failed to encode JSON: {}", e)))?;

    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }

    to_value(escaped).map_err(|e| tera::Error::msg(format!("Failed to convert to value: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_text_default() {
        let result = truncate_text(&json!("short"), &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), "short");
    }

    #[test]
    fn test_truncate_text_with_chars() {
        let mut args = HashMap::new();
        args.insert("chars".to_string(), json!(10));
        let result = truncate_text(&json!("The quick brown fox"), &args).unwrap();
        assert_eq!(result.as_str().unwrap(), "The quick...");
    }

    #[test]
    fn test_truncate_text_rejects_non_string() {
        assert!(truncate_text(&json!(42), &HashMap::new()).is_err());
    }

    #[test]
    fn test_json_script_escapes_markup() {
        let value = json!({"title": "</script><b>&</b>"});
        let result = json_script(&value, &HashMap::new()).unwrap();
        assert_eq!(
            result.as_str().unwrap(),
            r#"{"title":"\u003c/script\u003e\u003cb\u003e\u0026\u003c/b\u003e"}"#
        );
    }

    #[test]
    fn test_json_script_escapes_line_separators() {
        let value = json!("a\u{2028}b\u{2029}c");
        let result = json_script(&value, &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), r#""a\u2028b\u2029c""#);
    }

    #[test]
    fn test_json_script_plain_values_unchanged() {
        let result = json_script(&json!([[0, "asc"]]), &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), r#"[[0,"asc"]]"#);
    }
}
