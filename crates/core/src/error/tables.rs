//! Per-module status tables.
//!
//! Each table maps a status code (and the extracted body) to a refined
//! [`ApiError`]. Statuses a table does not list fall through to the generic
//! HTTP variant in [`translate`](super::translate).

use std::fmt;

use super::{translate, ApiError, CallFailure, ErrorBody, Refinement};

/// The API modules, each with its own status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiModule {
    Auth,
    Chat,
    Message,
    Group,
    Call,
    File,
}

impl ApiModule {
    pub const ALL: [ApiModule; 6] = [
        ApiModule::Auth,
        ApiModule::Chat,
        ApiModule::Message,
        ApiModule::Group,
        ApiModule::Call,
        ApiModule::File,
    ];

    /// Module name as used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiModule::Auth => "auth",
            ApiModule::Chat => "chat",
            ApiModule::Message => "message",
            ApiModule::Group => "group",
            ApiModule::Call => "call",
            ApiModule::File => "file",
        }
    }

    /// The status table for this module.
    pub fn refinement(self) -> Refinement {
        match self {
            ApiModule::Auth => auth_table,
            ApiModule::Chat => chat_table,
            ApiModule::Message => message_table,
            ApiModule::Group => group_table,
            ApiModule::Call => call_table,
            ApiModule::File => file_table,
        }
    }

    /// Translate a failure with this module's table.
    pub fn translate(self, failure: CallFailure) -> ApiError {
        translate(failure, self.refinement())
    }
}

impl fmt::Display for ApiModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statuses every module refines the same way.
fn session_table(status: u16, body: &ErrorBody) -> Option<ApiError> {
    let message = body.message.clone();
    match status {
        401 => Some(ApiError::SessionExpired { message }),
        403 => Some(ApiError::Forbidden { message }),
        404 => Some(ApiError::NotFound { message }),
        _ => None,
    }
}

fn validation_failed(body: &ErrorBody) -> ApiError {
    ApiError::ValidationFailed {
        message: body.message.clone(),
        errors: body.errors.clone(),
    }
}

/// Which resource a registration conflict is about.
///
/// Best effort: relies on the server's wording. Checked in order, first
/// substring match wins.
fn auth_conflict(message: &str) -> ApiError {
    let message = message.to_string();
    if message.contains("phone") {
        ApiError::PhoneAlreadyExists { message }
    } else if message.contains("email") {
        ApiError::EmailAlreadyExists { message }
    } else if message.contains("username") {
        ApiError::UsernameAlreadyExists { message }
    } else {
        ApiError::AlreadyExists { message }
    }
}

fn auth_table(status: u16, body: &ErrorBody) -> Option<ApiError> {
    match status {
        400 => Some(ApiError::InvalidCredentials {
            message: body.message.clone(),
        }),
        409 => Some(auth_conflict(&body.message)),
        422 => Some(validation_failed(body)),
        429 => Some(ApiError::RateLimited {
            message: body.message.clone(),
        }),
        _ => session_table(status, body),
    }
}

fn chat_table(status: u16, body: &ErrorBody) -> Option<ApiError> {
    match status {
        409 => Some(ApiError::AlreadyExists {
            message: body.message.clone(),
        }),
        422 => Some(validation_failed(body)),
        _ => session_table(status, body),
    }
}

fn message_table(status: u16, body: &ErrorBody) -> Option<ApiError> {
    match status {
        413 => Some(ApiError::PayloadTooLarge {
            message: body.message.clone(),
        }),
        422 => Some(validation_failed(body)),
        429 => Some(ApiError::RateLimited {
            message: body.message.clone(),
        }),
        _ => session_table(status, body),
    }
}

fn group_table(status: u16, body: &ErrorBody) -> Option<ApiError> {
    match status {
        409 => Some(ApiError::AlreadyExists {
            message: body.message.clone(),
        }),
        422 => Some(validation_failed(body)),
        _ => session_table(status, body),
    }
}

fn call_table(status: u16, body: &ErrorBody) -> Option<ApiError> {
    match status {
        409 => Some(ApiError::AlreadyExists {
            message: body.message.clone(),
        }),
        429 => Some(ApiError::RateLimited {
            message: body.message.clone(),
        }),
        _ => session_table(status, body),
    }
}

fn file_table(status: u16, body: &ErrorBody) -> Option<ApiError> {
    match status {
        413 => Some(ApiError::PayloadTooLarge {
            message: body.message.clone(),
        }),
        415 => Some(ApiError::UnsupportedMediaType {
            message: body.message.clone(),
        }),
        429 => Some(ApiError::RateLimited {
            message: body.message.clone(),
        }),
        _ => session_table(status, body),
    }
}
