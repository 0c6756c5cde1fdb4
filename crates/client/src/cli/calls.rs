//! Call CLI commands.

use clap::{ArgGroup, Parser, Subcommand};

/// Call commands.
#[derive(Debug, Parser)]
pub struct CallsCommand {
    #[command(subcommand)]
    pub action: CallsAction,
}

/// Available call actions.
#[derive(Debug, Subcommand)]
pub enum CallsAction {
    /// Start a call with users, or in a chat or group.
    #[command(group(ArgGroup::new("target").required(true).args(["users", "chat", "group"])))]
    Start {
        /// Start a video call instead of audio.
        #[arg(long)]
        video: bool,
        /// Callee user ID (repeatable).
        #[arg(long = "user")]
        users: Vec<String>,
        #[arg(long)]
        chat: Option<String>,
        #[arg(long)]
        group: Option<String>,
    },
    /// Accept an incoming call.
    Accept { id: String },
    /// Reject an incoming call.
    Reject {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// End a call.
    End { id: String },
    /// Get call by ID.
    Get { id: String },
    /// Change your mute or video state. Only the flags given are changed.
    State {
        id: String,
        #[arg(long)]
        muted: Option<bool>,
        #[arg(long)]
        video: Option<bool>,
    },
    /// List past calls.
    History {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show STUN/TURN servers.
    IceServers,
}
