//! Chat CLI commands.

use clap::{Parser, Subcommand};

/// Chat commands.
#[derive(Debug, Parser)]
pub struct ChatsCommand {
    #[command(subcommand)]
    pub action: ChatsAction,
}

/// Available chat actions.
#[derive(Debug, Subcommand)]
pub enum ChatsAction {
    /// List chats.
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Only archived (true) or unarchived (false) chats.
        #[arg(long)]
        archived: Option<bool>,
    },
    /// Get chat by ID.
    Get { id: String },
    /// Open a direct chat with a user.
    Create {
        /// The other participant's user ID.
        participant_id: String,
    },
    /// Update chat settings. Only the flags given are changed.
    Settings {
        id: String,
        #[arg(long, conflicts_with = "unmute")]
        mute: bool,
        #[arg(long)]
        unmute: bool,
        #[arg(long)]
        pinned: Option<bool>,
        #[arg(long)]
        archived: Option<bool>,
        #[arg(long)]
        wallpaper: Option<String>,
    },
    /// Mark every message in a chat as read.
    Read { id: String },
    /// Delete chat by ID.
    Delete { id: String },
    /// Search chats by name or participant.
    Search { query: String },
}
