use serde::{Deserialize, Serialize};

use crate::models::MediaKind;

/// A file to upload as a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFileRequest {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub chat_id: Option<String>,
    pub caption: Option<String>,
}

impl UploadFileRequest {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
            chat_id: None,
            caption: None,
        }
    }

    pub fn for_chat(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Text parts of the form, excluding the file itself. Unset fields are left out.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        [("chatId", &self.chat_id), ("caption", &self.caption)]
            .into_iter()
            .filter_map(|(name, value)| value.clone().map(|value| (name, value)))
            .collect()
    }
}

/// Filter for a chat's shared media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQuery {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
