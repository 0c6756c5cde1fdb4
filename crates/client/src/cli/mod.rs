//! CLI command definitions.

pub mod auth;
pub mod calls;
pub mod chats;
pub mod files;
pub mod groups;
pub mod messages;

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ClientConfig, DEFAULT_BASE_URL};

/// CLI client for the chatline API.
#[derive(Debug, Parser)]
#[command(name = "chatline-client")]
#[command(about = "CLI client for the chatline API", long_about = None)]
pub struct Cli {
    /// API base URL.
    #[arg(long, env = "CHATLINE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token for authenticated calls.
    #[arg(long, env = "CHATLINE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "CHATLINE_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration from the global options.
    pub fn config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        match &self.token {
            Some(token) => config.with_access_token(token.clone()),
            None => config,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full response envelope as JSON.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign-in, registration and profile.
    Auth(auth::AuthCommand),
    /// Conversations.
    Chats(chats::ChatsCommand),
    /// Messages within chats.
    Messages(messages::MessagesCommand),
    /// Group management.
    Groups(groups::GroupsCommand),
    /// Call signalling.
    Calls(calls::CallsCommand),
    /// File uploads and downloads.
    Files(files::FilesCommand),
}
