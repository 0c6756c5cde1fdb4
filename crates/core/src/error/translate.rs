use serde_json::Value;

use super::{ApiError, ErrorBody};

/// Failures that happen before any HTTP response is received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    ConnectionFailed,
    Cancelled,
}

/// A received non-2xx response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    pub status: u16,
    pub body: Option<Value>,
    pub raw_body: Option<String>,
}

impl HttpFailure {
    /// Build from a status and the raw body text.
    ///
    /// The body is parsed as JSON when possible; an empty body is absent.
    pub fn from_text(status: u16, text: &str) -> Self {
        if text.trim().is_empty() {
            return Self {
                status,
                body: None,
                raw_body: None,
            };
        }
        Self {
            status,
            body: serde_json::from_str(text).ok(),
            raw_body: Some(text.to_string()),
        }
    }
}

/// Everything a failed call can report.
#[derive(Debug, Clone, PartialEq)]
pub enum CallFailure {
    Transport(TransportFailure),
    Http(HttpFailure),
    /// Any failure shape not recognized above, as its display string.
    Other(String),
}

/// Module-specific status table consulted before the generic HTTP kind.
pub type Refinement = fn(u16, &ErrorBody) -> Option<ApiError>;

/// Refinement that never matches.
pub fn no_refinement(_status: u16, _body: &ErrorBody) -> Option<ApiError> {
    None
}

/// Translate a failed call into exactly one [`ApiError`].
///
/// Transport failures win over everything and never inspect a body. HTTP
/// failures go through `refine` first and fall back to [`ApiError::Http`].
///
/// # Examples
///
/// ```
/// use chatline_core::error::{translate, ApiModule, ApiError, CallFailure, HttpFailure};
///
/// let failure = CallFailure::Http(HttpFailure::from_text(401, r#"{"message": "Token expired"}"#));
/// assert_eq!(
///     translate(failure, ApiModule::Auth.refinement()),
///     ApiError::SessionExpired { message: "Token expired".to_string() }
/// );
/// ```
pub fn translate(failure: CallFailure, refine: Refinement) -> ApiError {
    match failure {
        CallFailure::Transport(TransportFailure::Timeout) => ApiError::Timeout,
        CallFailure::Transport(TransportFailure::ConnectionFailed) => ApiError::NoConnection,
        CallFailure::Transport(TransportFailure::Cancelled) => ApiError::RequestCancelled,
        CallFailure::Http(http) => {
            let body = ErrorBody::extract(http.body.as_ref());
            refine(http.status, &body).unwrap_or(ApiError::Http {
                status_code: http.status,
                message: body.message,
                error_code: body.code,
                raw_body: http.raw_body,
            })
        }
        CallFailure::Other(message) => ApiError::Unknown { message },
    }
}
