use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Audio,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Ringing,
    Ongoing,
    Ended,
    Missed,
    Rejected,
}

impl CallStatus {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            CallStatus::Ended | CallStatus::Missed | CallStatus::Rejected
        )
    }
}

/// Device a participant joined a call from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDevice {
    pub device_id: String,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParticipant {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub device: Option<CallDevice>,
    #[serde(default)]
    pub is_muted: bool,
    #[serde(default)]
    pub is_video_enabled: bool,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub left_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: CallType,
    pub status: CallStatus,
    pub caller_id: String,
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub participants: Vec<CallParticipant>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Duration in seconds, set once the call ended.
    #[serde(default)]
    pub duration: Option<u64>,
}

impl Call {
    /// Duration in seconds, from the server or derived from timestamps.
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration.or_else(|| {
            let (started, ended) = (self.started_at?, self.ended_at?);
            u64::try_from((ended - started).num_seconds()).ok()
        })
    }
}

/// STUN/TURN server handed to the WebRTC stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceServer {
    pub urls: Vec<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub credential: Option<String>,
}
