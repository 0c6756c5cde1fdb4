//! Chat API operations.

use chatline_core::endpoints;
use chatline_core::models::Chat;
use chatline_core::requests::{
    CreateChatRequest, ListChatsQuery, SearchQuery, UpdateChatSettingsRequest,
};
use chatline_core::{json_item, json_list, ApiModule, ApiResponse};
use serde_json::Value;

use super::Transport;
use crate::error::Result;

const MODULE: ApiModule = ApiModule::Chat;

/// Conversation list and per-chat settings.
#[derive(Debug, Clone, Copy)]
pub struct ChatApi<'a> {
    transport: &'a Transport,
}

impl<'a> ChatApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List chats. Pagination is carried in the envelope's `meta`.
    pub async fn list_chats(&self, query: ListChatsQuery) -> Result<ApiResponse<Vec<Chat>>> {
        let request = self.transport.get(endpoints::CHATS).query(&query);
        self.transport.fetch(MODULE, request, json_list).await
    }

    pub async fn get_chat(&self, id: &str) -> Result<ApiResponse<Chat>> {
        let request = self.transport.get(&endpoints::chat(id));
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Open (or reuse) a direct chat with another user.
    pub async fn create_chat(&self, req: CreateChatRequest) -> Result<ApiResponse<Chat>> {
        let request = self.transport.post(endpoints::CHATS).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Change chat settings; unset fields are left untouched.
    pub async fn update_settings(
        &self,
        id: &str,
        req: UpdateChatSettingsRequest,
    ) -> Result<ApiResponse<Chat>> {
        let request = self.transport.put(&endpoints::chat_settings(id)).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn mark_read(&self, id: &str) -> Result<ApiResponse<Value>> {
        let request = self.transport.post(&endpoints::chat_read(id));
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn delete_chat(&self, id: &str) -> Result<ApiResponse<Value>> {
        let request = self.transport.delete(&endpoints::chat(id));
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn search_chats(&self, query: &str) -> Result<ApiResponse<Vec<Chat>>> {
        let query = SearchQuery {
            q: query.to_string(),
        };
        let request = self.transport.get(endpoints::CHAT_SEARCH).query(&query);
        self.transport.fetch(MODULE, request, json_list).await
    }
}
