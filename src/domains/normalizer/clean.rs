//! Success-path normalization.

use serde_json::Value;
use tracing::warn;

use super::{ERROR_KEY, NormalizedResult, RESULT_KEY, parse_object, single_entry};

/// Envelope key some upstreams wrap their payload in.
const DATA_KEY: &str = "data";

/// Normalize a success response body.
///
/// - `{"data": {...}}` is flattened to the nested object.
/// - `{"data": <non-object>}` becomes `{"result": <value>}`.
/// - Any other object is returned unchanged.
///
/// When the body is not a JSON object the raw text itself is returned as
/// `{"error": <raw>}` so nothing the upstream sent is lost.
pub fn parse_and_return_clean_json(raw: &str) -> NormalizedResult {
    let mut object = match parse_object(raw) {
        Ok(object) => object,
        Err(e) => {
            warn!(cause = %e, "Failed to parse response JSON");
            return single_entry(ERROR_KEY, raw);
        }
    };

    match object.remove(DATA_KEY) {
        Some(Value::Object(nested)) => nested,
        Some(payload) => single_entry(RESULT_KEY, payload),
        None => object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_value(result: NormalizedResult) -> Value {
        Value::Object(result)
    }

    #[test]
    fn test_object_without_data_passes_through() {
        let raw = r#"{"id": 7, "name": "widget", "tags": ["a", "b"], "extra": null}"#;
        let result = parse_and_return_clean_json(raw);
        assert_eq!(
            as_value(result),
            json!({"id": 7, "name": "widget", "tags": ["a", "b"], "extra": null})
        );
    }

    #[test]
    fn test_empty_object_passes_through() {
        assert!(parse_and_return_clean_json("{}").is_empty());
    }

    #[test]
    fn test_nested_data_object_is_flattened() {
        let result = parse_and_return_clean_json(r#"{"data":{"a":1}}"#);
        assert_eq!(as_value(result), json!({"a": 1}));
    }

    #[test]
    fn test_flattening_drops_sibling_fields() {
        let raw = r#"{"status": "OK", "data": {"balance": 10.5, "currency": "IDR"}}"#;
        let result = parse_and_return_clean_json(raw);
        assert_eq!(as_value(result), json!({"balance": 10.5, "currency": "IDR"}));
    }

    #[test]
    fn test_scalar_data_is_wrapped() {
        let result = parse_and_return_clean_json(r#"{"data":5}"#);
        assert_eq!(as_value(result), json!({"result": 5}));
    }

    #[test]
    fn test_array_and_null_data_are_wrapped() {
        let result = parse_and_return_clean_json(r#"{"data":[1,2,3]}"#);
        assert_eq!(as_value(result), json!({"result": [1, 2, 3]}));

        let result = parse_and_return_clean_json(r#"{"data":null}"#);
        assert_eq!(as_value(result), json!({"result": null}));

        let result = parse_and_return_clean_json(r#"{"data":"done"}"#);
        assert_eq!(as_value(result), json!({"result": "done"}));
    }

    #[test]
    fn test_malformed_text_is_returned_verbatim() {
        let result = parse_and_return_clean_json("not json");
        assert_eq!(as_value(result), json!({"error": "not json"}));
    }

    #[test]
    fn test_non_object_json_is_returned_verbatim() {
        let result = parse_and_return_clean_json("[1,2]");
        assert_eq!(as_value(result), json!({"error": "[1,2]"}));

        let result = parse_and_return_clean_json("");
        assert_eq!(as_value(result), json!({"error": ""}));
    }

    #[test]
    fn test_trailing_content_after_object_is_ignored() {
        let result = parse_and_return_clean_json(r#"{"a":1} x"#);
        assert_eq!(as_value(result), json!({"a": 1}));

        let result = parse_and_return_clean_json(r#"{"data": {"id": 3}} trailing"#);
        assert_eq!(as_value(result), json!({"id": 3}));
    }
}
