use std::collections::BTreeMap;

use serde_json::Value;

/// Message used when an error body carries no usable `message`.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Structured view of a non-2xx response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub code: Option<String>,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    /// Extract `message`, `code` and `errors` from a response body.
    ///
    /// Anything that is not a JSON object yields the default message, no code
    /// and no field errors. `code` may be a string or a number.
    pub fn extract(body: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = body else {
            return Self::default();
        };

        let message = map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string();

        let code = match map.get("code") {
            Some(Value::String(code)) => Some(code.clone()),
            Some(Value::Number(code)) => Some(code.to_string()),
            _ => None,
        };

        let errors = map
            .get("errors")
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|(field, value)| {
                        field_messages(value).map(|messages| (field.clone(), messages))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            message,
            code,
            errors,
        }
    }
}

impl Default for ErrorBody {
    fn default() -> Self {
        Self {
            message: DEFAULT_ERROR_MESSAGE.to_string(),
            code: None,
            errors: BTreeMap::new(),
        }
    }
}

fn field_messages(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(message) => Some(vec![message.clone()]),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_message_and_code() {
        let body = json!({"message": "Chat not found", "code": "CHAT_NOT_FOUND"});
        let extracted = ErrorBody::extract(Some(&body));

        assert_eq!(extracted.message, "Chat not found");
        assert_eq!(extracted.code.as_deref(), Some("CHAT_NOT_FOUND"));
        assert!(extracted.errors.is_empty());
    }

    #[test]
    fn test_numeric_code_is_stringified() {
        let body = json!({"message": "nope", "code": 4011});
        assert_eq!(
            ErrorBody::extract(Some(&body)).code.as_deref(),
            Some("4011")
        );
    }

    #[test]
    fn test_absent_body_uses_default() {
        assert_eq!(ErrorBody::extract(None), ErrorBody::default());
    }

    #[test]
    fn test_non_object_body_uses_default() {
        let body = json!(["message"]);
        let extracted = ErrorBody::extract(Some(&body));

        assert_eq!(extracted.message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(extracted.code, None);
    }

    #[test]
    fn test_missing_message_uses_default() {
        let body = json!({"code": "E1"});
        let extracted = ErrorBody::extract(Some(&body));

        assert_eq!(extracted.message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(extracted.code.as_deref(), Some("E1"));
    }

    #[test]
    fn test_field_errors() {
        let body = json!({
            "message": "Validation failed",
            "errors": {
                "name": "is required",
                "phone": ["is too short", "must be numeric"],
                "ignored": 3
            }
        });
        let extracted = ErrorBody::extract(Some(&body));

        assert_eq!(extracted.errors.len(), 2);
        assert_eq!(extracted.errors["name"], vec!["is required"]);
        assert_eq!(
            extracted.errors["phone"],
            vec!["is too short", "must be numeric"]
        );
    }
}
