//! Client error types.

use chatline_core::{ApiError, DecodeError};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// A failed call, already translated by the module's status table.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success body that could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The translated API failure, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(error) => Some(error),
            _ => None,
        }
    }
}
