use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    Direct,
    Group,
}

/// A user taking part in a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Per-user settings of a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSettings {
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub mute_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub wallpaper: Option<String>,
}

/// A conversation as listed on the chats screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub last_message: Option<Message>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub settings: ChatSettings,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Chat {
    /// Title for a chat: its name, or the other participant for direct chats.
    pub fn title(&self, me: &str) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.participants
            .iter()
            .filter(|participant| participant.user_id != me)
            .map(|participant| participant.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
