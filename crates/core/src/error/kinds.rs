use std::collections::BTreeMap;

use thiserror::Error;

/// Generic text shown for failures that must not leak transport details.
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Closed set of failures surfaced by every API module.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request timed out")]
    Timeout,

    #[error("No connection to the server")]
    NoConnection,

    #[error("Request was cancelled")]
    RequestCancelled,

    #[error("Invalid credentials: {message}")]
    InvalidCredentials { message: String },

    #[error("Session expired: {message}")]
    SessionExpired { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Phone number already exists: {message}")]
    PhoneAlreadyExists { message: String },

    #[error("Email already exists: {message}")]
    EmailAlreadyExists { message: String },

    #[error("Username already exists: {message}")]
    UsernameAlreadyExists { message: String },

    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },

    #[error("Unsupported media type: {message}")]
    UnsupportedMediaType { message: String },

    #[error("Server returned {status_code}: {message}")]
    Http {
        status_code: u16,
        message: String,
        error_code: Option<String>,
        raw_body: Option<String>,
    },

    #[error("Unexpected error: {message}")]
    Unknown { message: String },
}

impl ApiError {
    /// Status code behind an HTTP-derived failure.
    ///
    /// Refined variants report the status their tables map from.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Timeout
            | ApiError::NoConnection
            | ApiError::RequestCancelled
            | ApiError::Unknown { .. } => None,
            ApiError::InvalidCredentials { .. } => Some(400),
            ApiError::SessionExpired { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::PhoneAlreadyExists { .. }
            | ApiError::EmailAlreadyExists { .. }
            | ApiError::UsernameAlreadyExists { .. }
            | ApiError::AlreadyExists { .. } => Some(409),
            ApiError::PayloadTooLarge { .. } => Some(413),
            ApiError::UnsupportedMediaType { .. } => Some(415),
            ApiError::ValidationFailed { .. } => Some(422),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::Http { status_code, .. } => Some(*status_code),
        }
    }

    /// Server-provided error code, only carried by the generic HTTP variant.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ApiError::Http { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    /// Failures worth offering a retry for.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::NoConnection)
    }

    /// Failures the user caused and should not be told about.
    pub fn is_silent(&self) -> bool {
        matches!(self, ApiError::RequestCancelled)
    }

    /// Failures that should send the user back to login.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::SessionExpired { .. })
    }

    /// Text safe to show an end user.
    ///
    /// HTTP-derived failures show the server message; `Unknown` never exposes
    /// the underlying error string.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout => "The request timed out. Please try again.".to_string(),
            ApiError::NoConnection => {
                "No internet connection. Check your network and try again.".to_string()
            }
            ApiError::RequestCancelled => String::new(),
            ApiError::Unknown { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            ApiError::InvalidCredentials { message }
            | ApiError::SessionExpired { message }
            | ApiError::Forbidden { message }
            | ApiError::NotFound { message }
            | ApiError::PhoneAlreadyExists { message }
            | ApiError::EmailAlreadyExists { message }
            | ApiError::UsernameAlreadyExists { message }
            | ApiError::AlreadyExists { message }
            | ApiError::ValidationFailed { message, .. }
            | ApiError::RateLimited { message }
            | ApiError::PayloadTooLarge { message }
            | ApiError::UnsupportedMediaType { message }
            | ApiError::Http { message, .. } => message.clone(),
        }
    }
}
