//! Call API operations.

use chatline_core::endpoints;
use chatline_core::models::{Call, IceServer};
use chatline_core::requests::{
    InitiateCallRequest, PageQuery, RejectCallRequest, UpdateCallStateRequest,
};
use chatline_core::{json_item, json_list, ApiModule, ApiResponse};

use super::Transport;
use crate::error::Result;

const MODULE: ApiModule = ApiModule::Call;

/// Call signalling over REST. Media transport is out of scope.
#[derive(Debug, Clone, Copy)]
pub struct CallApi<'a> {
    transport: &'a Transport,
}

impl<'a> CallApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn initiate_call(&self, req: InitiateCallRequest) -> Result<ApiResponse<Call>> {
        let request = self.transport.post(endpoints::CALLS).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn accept_call(&self, id: &str) -> Result<ApiResponse<Call>> {
        self.action(id, "accept").await
    }

    pub async fn reject_call(&self, id: &str, reason: Option<String>) -> Result<ApiResponse<Call>> {
        let request = self
            .transport
            .post(&endpoints::call_action(id, "reject"))
            .json(&RejectCallRequest { reason });
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn end_call(&self, id: &str) -> Result<ApiResponse<Call>> {
        self.action(id, "end").await
    }

    pub async fn get_call(&self, id: &str) -> Result<ApiResponse<Call>> {
        let request = self.transport.get(&endpoints::call(id));
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Toggle mute or video; unset fields are left untouched.
    pub async fn update_call_state(
        &self,
        id: &str,
        req: UpdateCallStateRequest,
    ) -> Result<ApiResponse<Call>> {
        let request = self
            .transport
            .put(&endpoints::call_action(id, "state"))
            .json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn call_history(&self, query: PageQuery) -> Result<ApiResponse<Vec<Call>>> {
        let request = self.transport.get(endpoints::CALL_HISTORY).query(&query);
        self.transport.fetch(MODULE, request, json_list).await
    }

    /// STUN/TURN servers for establishing media.
    pub async fn ice_servers(&self) -> Result<ApiResponse<Vec<IceServer>>> {
        let request = self.transport.get(endpoints::ICE_SERVERS);
        self.transport.fetch(MODULE, request, json_list).await
    }

    async fn action(&self, id: &str, action: &str) -> Result<ApiResponse<Call>> {
        let request = self.transport.post(&endpoints::call_action(id, action));
        self.transport.fetch(MODULE, request, json_item).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use chatline_core::models::{CallStatus, CallType};
    use chatline_core::ApiError;
    use serde_json::{json, Value};

    use super::*;
    use crate::client::test_server::{call_json, client_for, envelope, failure};
    use crate::error::ClientError;

    #[tokio::test]
    async fn test_initiate_call_body() {
        let router = Router::new().route(
            "/calls",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"type": "video", "calleeIds": ["u2"]}));
                envelope(call_json("k1", "ringing"))
            }),
        );
        let client = client_for(router).await;

        let call = client
            .calls()
            .initiate_call(InitiateCallRequest::to_users(CallType::Video, ["u2"]))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(call.id, "k1");
        assert_eq!(call.status, CallStatus::Ringing);
    }

    #[tokio::test]
    async fn test_end_call() {
        let router = Router::new().route(
            "/calls/{id}/end",
            post(|| async { envelope(call_json("k1", "ended")) }),
        );
        let client = client_for(router).await;

        let call = client.calls().end_call("k1").await.unwrap().data.unwrap();

        assert!(call.status.is_finished());
    }

    #[tokio::test]
    async fn test_reject_without_reason_sends_empty_body() {
        let router = Router::new().route(
            "/calls/{id}/reject",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({}));
                envelope(call_json("k1", "rejected"))
            }),
        );
        let client = client_for(router).await;

        let call = client.calls().reject_call("k1", None).await.unwrap().data.unwrap();

        assert_eq!(call.status, CallStatus::Rejected);
    }

    #[tokio::test]
    async fn test_update_state_sends_only_set_fields() {
        let router = Router::new().route(
            "/calls/{id}/state",
            put(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"isMuted": true}));
                let mut call = call_json("k1", "ongoing");
                call["participants"] = json!([{"userId": "u1", "isMuted": true}]);
                envelope(call)
            }),
        );
        let client = client_for(router).await;

        let call = client
            .calls()
            .update_call_state(
                "k1",
                UpdateCallStateRequest {
                    is_muted: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(call.id, "k1");
        assert!(call.participants[0].is_muted);
    }

    #[tokio::test]
    async fn test_history_page_query() {
        let router = Router::new().route(
            "/calls/history",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("page").map(String::as_str), Some("3"));
                envelope(json!([call_json("k1", "ended"), call_json("k2", "missed")]))
            }),
        );
        let client = client_for(router).await;

        let calls = client
            .calls()
            .call_history(PageQuery::new().with_page(3))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].status, CallStatus::Missed);
    }

    #[tokio::test]
    async fn test_ice_servers() {
        let router = Router::new().route(
            "/calls/ice-servers",
            get(|| async {
                envelope(json!([
                    {"urls": ["stun:stun.example.com:3478"]},
                    {"urls": ["turn:turn.example.com"], "username": "u", "credential": "p"}
                ]))
            }),
        );
        let client = client_for(router).await;

        let servers = client.calls().ice_servers().await.unwrap().data.unwrap();

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[1].username.as_deref(), Some("u"));
    }

    #[tokio::test]
    async fn test_busy_callee_conflict() {
        let router = Router::new().route(
            "/calls",
            post(|| async { failure(StatusCode::CONFLICT, "User is already in a call") }),
        );
        let client = client_for(router).await;

        let error = client
            .calls()
            .initiate_call(InitiateCallRequest::in_chat(CallType::Audio, "c1"))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ClientError::Api(ApiError::AlreadyExists {
                message: "User is already in a call".to_string()
            })
        );
    }
}
