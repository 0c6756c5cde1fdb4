//! Auth API operations.

use chatline_core::endpoints;
use chatline_core::models::{
    AuthResponse, AuthTokens, DeviceInfo, OtpChallenge, User, UsernameAvailability,
};
use chatline_core::requests::{
    LoginRequest, RefreshTokenRequest, RegisterRequest, SendOtpRequest, UpdateProfileRequest,
    VerifyOtpRequest,
};
use chatline_core::{json_item, ApiModule, ApiResponse};
use serde_json::Value;

use super::Transport;
use crate::error::Result;

const MODULE: ApiModule = ApiModule::Auth;

/// Login, registration and profile endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    transport: &'a Transport,
}

impl<'a> AuthApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Request an SMS one-time password.
    pub async fn send_otp(&self, req: SendOtpRequest) -> Result<ApiResponse<OtpChallenge>> {
        let request = self.transport.post(endpoints::SEND_OTP).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Exchange a one-time password for a session.
    pub async fn verify_otp(&self, req: VerifyOtpRequest) -> Result<ApiResponse<AuthResponse>> {
        let request = self.transport.post(endpoints::VERIFY_OTP).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Create an account.
    pub async fn register(&self, req: RegisterRequest) -> Result<ApiResponse<AuthResponse>> {
        let request = self.transport.post(endpoints::REGISTER).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Password login.
    pub async fn login(&self, req: LoginRequest) -> Result<ApiResponse<AuthResponse>> {
        let request = self.transport.post(endpoints::LOGIN).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Trade a refresh token for new tokens.
    pub async fn refresh_token(
        &self,
        refresh_token: impl Into<String>,
    ) -> Result<ApiResponse<AuthTokens>> {
        let req = RefreshTokenRequest {
            refresh_token: refresh_token.into(),
        };
        let request = self.transport.post(endpoints::REFRESH_TOKEN).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<ApiResponse<Value>> {
        let request = self.transport.post(endpoints::LOGOUT);
        self.transport.fetch_raw(MODULE, request).await
    }

    /// The signed-in user.
    pub async fn me(&self) -> Result<ApiResponse<User>> {
        let request = self.transport.get(endpoints::ME);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Change profile fields; unset fields are left untouched.
    pub async fn update_profile(&self, req: UpdateProfileRequest) -> Result<ApiResponse<User>> {
        let request = self.transport.put(endpoints::PROFILE).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn check_username(
        &self,
        username: &str,
    ) -> Result<ApiResponse<UsernameAvailability>> {
        let request = self
            .transport
            .get(endpoints::CHECK_USERNAME)
            .query(&[("username", username)]);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Register this device for push notifications.
    pub async fn register_device(&self, device: DeviceInfo) -> Result<ApiResponse<Value>> {
        let request = self.transport.post(endpoints::DEVICES).json(&device);
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn delete_account(&self) -> Result<ApiResponse<Value>> {
        let request = self.transport.delete(endpoints::ACCOUNT);
        self.transport.fetch_raw(MODULE, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use chatline_core::ApiError;
    use serde_json::{json, Value};

    use super::*;
    use crate::client::test_server::{client_for, echo_body, envelope, failure, user_json};
    use crate::error::ClientError;

    #[tokio::test]
    async fn test_verify_otp_decodes_session() {
        let router = Router::new().route(
            "/auth/verify-otp",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["otp"], "123456");
                envelope(json!({
                    "accessToken": "access",
                    "refreshToken": "refresh",
                    "user": user_json("u1"),
                    "isNewUser": true
                }))
            }),
        );
        let client = client_for(router).await;

        let response = client
            .auth()
            .verify_otp(VerifyOtpRequest::new("+15550100", "123456"))
            .await
            .unwrap();

        let session = response.data.unwrap();
        assert!(response.success);
        assert_eq!(session.tokens.access_token, "access");
        assert_eq!(session.user.id, "u1");
        assert!(session.is_new_user);
    }

    #[tokio::test]
    async fn test_update_profile_sends_only_set_fields() {
        let router = Router::new().route(
            "/auth/profile",
            put(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"about": "Climbing"}));
                let mut user = user_json("u1");
                user["about"] = json!("Climbing");
                envelope(user)
            }),
        );
        let client = client_for(router).await;

        let user = client
            .auth()
            .update_profile(UpdateProfileRequest::new().with_about("Climbing"))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.about.as_deref(), Some("Climbing"));
    }

    #[tokio::test]
    async fn test_register_phone_conflict() {
        let router = Router::new().route(
            "/auth/register",
            post(|| async { failure(StatusCode::CONFLICT, "phone number already exists") }),
        );
        let client = client_for(router).await;

        let error = client
            .auth()
            .register(RegisterRequest::new("+15550100", "Ada"))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ClientError::Api(ApiError::PhoneAlreadyExists {
                message: "phone number already exists".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_me_session_expired() {
        let router = Router::new().route(
            "/auth/me",
            get(|| async { failure(StatusCode::UNAUTHORIZED, "Token expired") }),
        );
        let client = client_for(router).await;

        let error = client.auth().me().await.unwrap_err();

        assert!(error.api_error().unwrap().requires_login());
    }

    #[tokio::test]
    async fn test_logout_without_data() {
        let router = Router::new().route(
            "/auth/logout",
            post(|| async { Json(json!({"success": true, "message": "Logged out", "data": null})) }),
        );
        let client = client_for(router).await;

        let response = client.auth().logout().await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Logged out");
        assert_eq!(response.data, None);
    }

    #[tokio::test]
    async fn test_check_username_query() {
        let router = Router::new().route(
            "/auth/check-username",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                let taken = query.get("username").map(String::as_str) == Some("ada");
                envelope(json!({"available": !taken, "suggestions": ["ada_1", "ada.l"]}))
            }),
        );
        let client = client_for(router).await;

        let availability = client.auth().check_username("ada").await.unwrap().data.unwrap();

        assert!(!availability.available);
        assert_eq!(availability.suggestions, vec!["ada_1", "ada.l"]);
    }

    #[tokio::test]
    async fn test_register_device_body() {
        let router = Router::new().route("/auth/devices", post(echo_body));
        let client = client_for(router).await;

        let response = client
            .auth()
            .register_device(DeviceInfo::new("d1", "ios").with_push_token("apns-token"))
            .await
            .unwrap();

        let body = response.data.unwrap();
        assert_eq!(body["pushToken"], "apns-token");
        assert!(body.get("appVersion").is_none());
    }
}
