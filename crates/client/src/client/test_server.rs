//! In-process API server for client tests.

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::ChatlineClient;
use crate::config::ClientConfig;

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", address)
}

/// A client talking to `router`.
pub(crate) async fn client_for(router: Router) -> ChatlineClient {
    let base_url = spawn(router).await;
    ChatlineClient::new(ClientConfig::new(base_url).with_access_token("test-token")).unwrap()
}

/// Success envelope around `data`.
pub(crate) fn envelope(data: Value) -> Json<Value> {
    Json(json!({"success": true, "message": "OK", "data": data}))
}

/// Failure envelope with a status and message.
pub(crate) fn failure(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({"success": false, "message": message})))
}

/// Handler echoing the JSON body back as `data`.
pub(crate) async fn echo_body(Json(body): Json<Value>) -> Json<Value> {
    envelope(body)
}

/// Handler echoing the query string back as `data`.
pub(crate) async fn echo_query(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    envelope(json!(query))
}

pub(crate) fn user_json(id: &str) -> Value {
    json!({"id": id, "phone": "+15550100", "name": "Ada"})
}

pub(crate) fn message_json(id: &str, chat_id: &str) -> Value {
    json!({
        "id": id,
        "chatId": chat_id,
        "senderId": "u1",
        "type": "text",
        "content": format!("message {}", id),
        "createdAt": "2025-03-01T10:00:00Z"
    })
}

pub(crate) fn group_json(id: &str, name: &str) -> Value {
    json!({"id": id, "name": name, "createdBy": "u1"})
}

pub(crate) fn call_json(id: &str, status: &str) -> Value {
    json!({"id": id, "type": "audio", "status": status, "callerId": "u1"})
}

pub(crate) fn file_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "photo.jpg",
        "url": format!("https://cdn.example.com/{}", id),
        "mimeType": "image/jpeg",
        "size": 2048
    })
}
