//! Tolerant reading of JSON with comments
//!
//! Task lists are hand edited, so `//` and `/* */` comments and trailing
//! commas are accepted on read. Writing always produces strict JSON.

use serde_json::Value;

/// Parse JSON that may contain comments and trailing commas
pub fn parse(input: &str) -> Result<Value, serde_json5::Error> {
    serde_json5::from_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_comments_and_trailing_commas() {
        let input = r#"{
            // See https://example.com/docs
            "version": "2.0.0", /* inline */
            "tasks": [
                { "label": "a", },
            ],
        }"#;
        assert_eq!(
            parse(input).unwrap(),
            json!({ "version": "2.0.0", "tasks": [{ "label": "a" }] })
        );
    }

    #[test]
    fn test_comment_markers_inside_strings_are_kept() {
        let input = r#"{ "url": "http://host/*x*/", "quote": "a\"//b", "list": "[1,]" }"#;
        assert_eq!(
            parse(input).unwrap(),
            json!({ "url": "http://host/*x*/", "quote": "a\"//b", "list": "[1,]" })
        );
    }

    #[test]
    fn test_keeps_key_order() {
        let value = parse(r#"{ "version": "2.0.0", "tasks": [], "inputs": [] }"#).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["version", "tasks", "inputs"]);
    }

    #[test]
    fn test_invalid_json_still_fails() {
        assert!(parse("{ \"tasks\": [ }").is_err());
        assert!(parse("not json").is_err());
    }

    #[test]
    fn test_malformed_lists_and_comments_are_rejected() {
        assert!(parse(r#"{ "tasks": [ , ] }"#).is_err());
        assert!(parse(r#"{ "tasks": [] } /* unterminated"#).is_err());
        assert!(parse(r#"{ "tasks": [ {}, , {} ] }"#).is_err());
    }
}
