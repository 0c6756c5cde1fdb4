//! Request payloads and query strings for every API module.
//!
//! Optional fields are skipped when unset: an omitted field means "leave as
//! is" and is never sent as `null`.

mod auth;
mod call;
mod chat;
mod file;
mod group;
mod message;

use serde::{Deserialize, Serialize};

pub use auth::{
    LoginRequest, RefreshTokenRequest, RegisterRequest, SendOtpRequest, UpdateProfileRequest,
    VerifyOtpRequest,
};
pub use call::{InitiateCallRequest, RejectCallRequest, UpdateCallStateRequest};
pub use chat::{CreateChatRequest, ListChatsQuery, SearchQuery, UpdateChatSettingsRequest};
pub use file::{MediaQuery, UploadFileRequest};
pub use group::{
    AddMembersRequest, CreateGroupRequest, CreateInviteRequest, UpdateGroupRequest,
    UpdateGroupSettingsRequest, UpdateMemberRoleRequest,
};
pub use message::{
    DeleteMessageQuery, EditMessageRequest, ForwardMessageRequest, ListMessagesQuery,
    ReactRequest, SearchMessagesQuery, SendMessageRequest,
};

/// Page/limit query shared by plain list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_page_query_serializes_to_nothing() {
        assert_eq!(serde_json::to_value(PageQuery::new()).unwrap(), json!({}));
    }

    #[test]
    fn test_page_query_only_set_fields() {
        assert_eq!(
            serde_json::to_value(PageQuery::new().with_limit(50)).unwrap(),
            json!({"limit": 50})
        );
    }
}
