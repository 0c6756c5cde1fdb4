use serde::{Deserialize, Serialize};

use crate::models::CallType;

/// Start a call with users, or in an existing chat or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCallRequest {
    #[serde(rename = "type")]
    pub call_type: CallType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub callee_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl InitiateCallRequest {
    pub fn to_users<I, S>(call_type: CallType, callee_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            call_type,
            callee_ids: callee_ids.into_iter().map(Into::into).collect(),
            chat_id: None,
            group_id: None,
        }
    }

    pub fn in_chat(call_type: CallType, chat_id: impl Into<String>) -> Self {
        Self {
            call_type,
            callee_ids: Vec::new(),
            chat_id: Some(chat_id.into()),
            group_id: None,
        }
    }

    pub fn in_group(call_type: CallType, group_id: impl Into<String>) -> Self {
        Self {
            call_type,
            callee_ids: Vec::new(),
            chat_id: None,
            group_id: Some(group_id.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectCallRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Participant state changes; only the fields set are changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCallStateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_muted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_video_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_to_users() {
        let request = InitiateCallRequest::to_users(CallType::Audio, ["u2"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "audio", "calleeIds": ["u2"]})
        );
    }

    #[test]
    fn test_call_in_group_omits_callees() {
        let request = InitiateCallRequest::in_group(CallType::Video, "g1");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "video", "groupId": "g1"})
        );
    }

    #[test]
    fn test_mute_only() {
        let request = UpdateCallStateRequest {
            is_muted: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(request).unwrap(), json!({"isMuted": true}));
    }
}
