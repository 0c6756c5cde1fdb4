//! JSON output formatting.

use serde_json::json;

use crate::error::ClientError;

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a failure as a failed envelope, so scripts can read one shape.
pub fn format_error(error: &ClientError) -> String {
    let body = match error {
        ClientError::Api(api) => json!({
            "success": false,
            "message": api.user_message(),
            "status": api.status_code(),
            "code": api.error_code(),
            "retryable": api.is_retryable(),
        }),
        other => json!({
            "success": false,
            "message": other.to_string(),
        }),
    };
    format_json(&body)
}
