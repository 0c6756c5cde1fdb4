//! File API operations.

use chatline_core::endpoints;
use chatline_core::models::FileModel;
use chatline_core::requests::{MediaQuery, UploadFileRequest};
use chatline_core::{json_item, json_list, ApiModule, ApiResponse};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::Transport;
use crate::error::{ClientError, Result};

const MODULE: ApiModule = ApiModule::File;

/// Uploads, downloads and a chat's shared media.
#[derive(Debug, Clone, Copy)]
pub struct FileApi<'a> {
    transport: &'a Transport,
}

impl<'a> FileApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Upload a file as `multipart/form-data`.
    ///
    /// The file goes in the `file` part; `chatId` and `caption` are sent as
    /// text parts only when set.
    pub async fn upload(&self, req: UploadFileRequest) -> Result<ApiResponse<FileModel>> {
        let form = upload_form(req)?;
        let request = self.transport.post(endpoints::FILE_UPLOAD).multipart(form);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn get_file(&self, id: &str) -> Result<ApiResponse<FileModel>> {
        let request = self.transport.get(&endpoints::file(id));
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn delete_file(&self, id: &str) -> Result<ApiResponse<Value>> {
        let request = self.transport.delete(&endpoints::file(id));
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn list_chat_media(
        &self,
        chat_id: &str,
        query: MediaQuery,
    ) -> Result<ApiResponse<Vec<FileModel>>> {
        let request = self
            .transport
            .get(&endpoints::chat_media(chat_id))
            .query(&query);
        self.transport.fetch(MODULE, request, json_list).await
    }

    /// Raw file contents. The reply carries no envelope.
    pub async fn download(&self, id: &str) -> Result<Vec<u8>> {
        let request = self.transport.get(&endpoints::file_download(id));
        self.transport.execute_bytes(MODULE, request).await
    }
}

fn upload_form(req: UploadFileRequest) -> Result<Form> {
    let text_fields = req.text_fields();

    let part = Part::bytes(req.bytes)
        .file_name(req.file_name)
        .mime_str(&req.mime_type)
        .map_err(|e| ClientError::Config(format!("invalid mime type: {e}")))?;

    Ok(text_fields
        .into_iter()
        .fold(Form::new().part("file", part), |form, (name, value)| {
            form.text(name, value)
        }))
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use axum::extract::{Multipart, Query};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::Router;
    use chatline_core::models::MediaKind;
    use chatline_core::ApiError;
    use serde_json::json;

    use super::*;
    use crate::client::test_server::{client_for, envelope, failure, file_json};

    /// Every part received: text parts by value, the file by name, MIME
    /// type and length.
    async fn form_parts(mut multipart: Multipart) -> Value {
        let mut parts = BTreeMap::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let value = match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let mime = field.content_type().unwrap_or_default().to_string();
                    let len = field.bytes().await.map(|b| b.len()).unwrap_or_default();
                    json!({"fileName": file_name, "mimeType": mime, "len": len})
                }
                None => json!(field.text().await.unwrap_or_default()),
            };
            parts.insert(name, value);
        }
        json!(parts)
    }

    #[tokio::test]
    async fn test_upload_omits_unset_text_parts() {
        let router = Router::new().route(
            "/files/upload",
            post(|multipart: Multipart| async move {
                assert_eq!(
                    form_parts(multipart).await,
                    json!({"file": {"fileName": "a.png", "mimeType": "image/png", "len": 3}})
                );
                envelope(file_json("f1"))
            }),
        );
        let client = client_for(router).await;

        let file = client
            .files()
            .upload(UploadFileRequest::new("a.png", "image/png", vec![1, 2, 3]))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(file.id, "f1");
    }

    #[tokio::test]
    async fn test_upload_sends_set_text_parts() {
        let router = Router::new().route(
            "/files/upload",
            post(|multipart: Multipart| async move {
                let parts = form_parts(multipart).await;
                assert_eq!(parts["chatId"], "c1");
                assert_eq!(parts["caption"], "sunset");
                envelope(file_json("f2"))
            }),
        );
        let client = client_for(router).await;

        let req = UploadFileRequest::new("a.png", "image/png", vec![1])
            .for_chat("c1")
            .with_caption("sunset");
        let file = client.files().upload(req).await.unwrap().data.unwrap();

        assert_eq!(file.id, "f2");
    }

    #[tokio::test]
    async fn test_upload_decodes_file() {
        let router = Router::new().route(
            "/files/upload",
            post(|| async { envelope(file_json("f1")) }),
        );
        let client = client_for(router).await;

        let file = client
            .files()
            .upload(UploadFileRequest::new("photo.jpg", "image/jpeg", vec![0; 2048]))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(file.id, "f1");
        assert_eq!(file.kind(), MediaKind::Image);
    }

    #[test]
    fn test_invalid_mime_type_is_config_error() {
        let result = upload_form(UploadFileRequest::new("a", "not a mime", vec![]));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[tokio::test]
    async fn test_upload_too_large() {
        let router = Router::new().route(
            "/files/upload",
            post(|| async { failure(StatusCode::PAYLOAD_TOO_LARGE, "File exceeds 100MB") }),
        );
        let client = client_for(router).await;

        let error = client
            .files()
            .upload(UploadFileRequest::new("big.bin", "application/octet-stream", vec![0; 16]))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ClientError::Api(ApiError::PayloadTooLarge {
                message: "File exceeds 100MB".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_media_query_uses_type_key() {
        let router = Router::new().route(
            "/chats/{id}/media",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.len(), 1);
                assert_eq!(params.get("type").map(String::as_str), Some("video"));
                envelope(json!([file_json("f1"), file_json("f2")]))
            }),
        );
        let client = client_for(router).await;

        let query = MediaQuery {
            kind: Some(MediaKind::Video),
            ..Default::default()
        };
        let files = client
            .files()
            .list_chat_media("c1", query)
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(files.len(), 2);
    }

    #[tokio::test]
    async fn test_download_bytes_and_failure() {
        let router = Router::new()
            .route("/files/{id}/download", get(|| async { vec![7u8, 8, 9] }))
            .route(
                "/files/missing/download",
                get(|| async { failure(StatusCode::NOT_FOUND, "File not found") }),
            );
        let client = client_for(router).await;

        assert_eq!(client.files().download("f1").await.unwrap(), vec![7, 8, 9]);

        let error = client.files().download("missing").await.unwrap_err();
        assert_eq!(
            error,
            ClientError::Api(ApiError::NotFound {
                message: "File not found".to_string()
            })
        );
    }
}
