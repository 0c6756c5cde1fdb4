use serde::{Deserialize, Serialize};

use crate::models::{Location, MessageType, SharedContact};

/// Cursor query for a chat's message history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMessagesQuery {
    /// Only messages older than this message ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Only messages newer than this message ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// ID of a file uploaded beforehand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<SharedContact>,
}

impl SendMessageRequest {
    fn of_type(message_type: MessageType) -> Self {
        Self {
            message_type,
            content: None,
            media_id: None,
            reply_to: None,
            location: None,
            contact: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::of_type(MessageType::Text)
        }
    }

    /// A media message referencing an uploaded file.
    pub fn media(message_type: MessageType, media_id: impl Into<String>) -> Self {
        Self {
            media_id: Some(media_id.into()),
            ..Self::of_type(message_type)
        }
    }

    pub fn location(location: Location) -> Self {
        Self {
            location: Some(location),
            ..Self::of_type(MessageType::Location)
        }
    }

    pub fn contact(contact: SharedContact) -> Self {
        Self {
            contact: Some(contact),
            ..Self::of_type(MessageType::Contact)
        }
    }

    /// Caption for media, or text for any other type.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn replying_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to = Some(message_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMessageRequest {
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMessageQuery {
    pub for_everyone: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactRequest {
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardMessageRequest {
    pub chat_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMessagesQuery {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchMessagesQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            chat_id: None,
            limit: None,
        }
    }

    pub fn in_chat(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
