//! HTTP client for the chatline API.
//!
//! [`ChatlineClient`] is the composition root: it owns the [`Transport`] and
//! hands it to one wrapper per API module.

pub mod auth;
pub mod calls;
pub mod chats;
pub mod files;
pub mod groups;
pub mod messages;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_server;

use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::Result;

pub use auth::AuthApi;
pub use calls::CallApi;
pub use chats::ChatApi;
pub use files::FileApi;
pub use groups::GroupApi;
pub use messages::MessageApi;
pub use transport::Transport;

/// HTTP client for the chatline API.
#[derive(Debug, Clone)]
pub struct ChatlineClient {
    transport: Transport,
}

impl ChatlineClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_transport(Transport::new(&config)?))
    }

    /// Create a client around an existing transport.
    pub fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }

    /// Create from environment (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// A client whose calls resolve to `RequestCancelled` once `token` fires.
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self::from_transport(self.transport.with_cancellation(token))
    }

    /// A client sending `token` as bearer credentials, e.g. after login.
    pub fn with_access_token(self, token: impl Into<String>) -> Self {
        Self::from_transport(self.transport.with_access_token(token))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.transport)
    }

    pub fn chats(&self) -> ChatApi<'_> {
        ChatApi::new(&self.transport)
    }

    pub fn messages(&self) -> MessageApi<'_> {
        MessageApi::new(&self.transport)
    }

    pub fn groups(&self) -> GroupApi<'_> {
        GroupApi::new(&self.transport)
    }

    pub fn calls(&self) -> CallApi<'_> {
        CallApi::new(&self.transport)
    }

    pub fn files(&self) -> FileApi<'_> {
        FileApi::new(&self.transport)
    }
}
