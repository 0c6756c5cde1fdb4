//! Message API operations.

use chatline_core::endpoints;
use chatline_core::models::Message;
use chatline_core::requests::{
    DeleteMessageQuery, EditMessageRequest, ForwardMessageRequest, ListMessagesQuery,
    ReactRequest, SearchMessagesQuery, SendMessageRequest,
};
use chatline_core::{json_item, json_list, ApiModule, ApiResponse};
use serde_json::Value;

use super::Transport;
use crate::error::Result;

const MODULE: ApiModule = ApiModule::Message;

/// Sending, editing and searching messages.
#[derive(Debug, Clone, Copy)]
pub struct MessageApi<'a> {
    transport: &'a Transport,
}

impl<'a> MessageApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// A page of a chat's history, newest first.
    pub async fn list_messages(
        &self,
        chat_id: &str,
        query: ListMessagesQuery,
    ) -> Result<ApiResponse<Vec<Message>>> {
        let request = self
            .transport
            .get(&endpoints::chat_messages(chat_id))
            .query(&query);
        self.transport.fetch(MODULE, request, json_list).await
    }

    pub async fn send_message(
        &self,
        chat_id: &str,
        req: SendMessageRequest,
    ) -> Result<ApiResponse<Message>> {
        let request = self
            .transport
            .post(&endpoints::chat_messages(chat_id))
            .json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn edit_message(
        &self,
        id: &str,
        content: impl Into<String>,
    ) -> Result<ApiResponse<Message>> {
        let req = EditMessageRequest {
            content: content.into(),
        };
        let request = self.transport.put(&endpoints::message(id)).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Delete a message for the caller, or for every participant.
    pub async fn delete_message(&self, id: &str, for_everyone: bool) -> Result<ApiResponse<Value>> {
        let request = self
            .transport
            .delete(&endpoints::message(id))
            .query(&DeleteMessageQuery { for_everyone });
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn react(&self, id: &str, emoji: impl Into<String>) -> Result<ApiResponse<Message>> {
        let req = ReactRequest {
            emoji: emoji.into(),
        };
        let request = self
            .transport
            .post(&endpoints::message_reactions(id))
            .json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn remove_reaction(&self, id: &str) -> Result<ApiResponse<Value>> {
        let request = self.transport.delete(&endpoints::message_reactions(id));
        self.transport.fetch_raw(MODULE, request).await
    }

    /// Forward a message; returns one copy per target chat.
    pub async fn forward<I, S>(&self, id: &str, chat_ids: I) -> Result<ApiResponse<Vec<Message>>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let req = ForwardMessageRequest {
            chat_ids: chat_ids.into_iter().map(Into::into).collect(),
        };
        let request = self
            .transport
            .post(&endpoints::message_forward(id))
            .json(&req);
        self.transport.fetch(MODULE, request, json_list).await
    }

    pub async fn search_messages(
        &self,
        query: SearchMessagesQuery,
    ) -> Result<ApiResponse<Vec<Message>>> {
        let request = self
            .transport
            .get(endpoints::MESSAGE_SEARCH)
            .query(&query);
        self.transport.fetch(MODULE, request, json_list).await
    }
}
