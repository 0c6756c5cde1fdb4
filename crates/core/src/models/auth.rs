use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub phone: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Name to show, preferring the username handle when the name is blank.
    pub fn display_name(&self) -> &str {
        match (&self.username, self.name.trim().is_empty()) {
            (Some(username), true) => username,
            _ => &self.name,
        }
    }
}

/// Access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Result of a successful login, registration or OTP verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(flatten)]
    pub tokens: AuthTokens,
    pub user: User,
    /// True when the account was just created and needs profile setup.
    #[serde(default)]
    pub is_new_user: bool,
}

/// Answer to an OTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpChallenge {
    #[serde(default)]
    pub verification_id: Option<String>,
    /// Seconds until the code expires.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Seconds before another code may be requested.
    #[serde(default)]
    pub resend_after: Option<u64>,
}

/// Device registration details for push notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_id: String,
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl DeviceInfo {
    pub fn new(device_id: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            platform: platform.into(),
            push_token: None,
            app_version: None,
            model: None,
        }
    }

    pub fn with_push_token(mut self, push_token: impl Into<String>) -> Self {
        self.push_token = Some(push_token.into());
        self
    }

    pub fn with_app_version(mut self, app_version: impl Into<String>) -> Self {
        self.app_version = Some(app_version.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameAvailability {
    pub available: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
}
