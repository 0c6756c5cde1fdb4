//! Message CLI commands.

use clap::{Parser, Subcommand};

/// Message commands.
#[derive(Debug, Parser)]
pub struct MessagesCommand {
    #[command(subcommand)]
    pub action: MessagesAction,
}

/// Available message actions.
#[derive(Debug, Subcommand)]
pub enum MessagesAction {
    /// List a chat's messages, newest first.
    List {
        chat_id: String,
        /// Only messages older than this message ID.
        #[arg(long)]
        before: Option<String>,
        /// Only messages newer than this message ID.
        #[arg(long)]
        after: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Send a text message.
    Send {
        chat_id: String,
        text: String,
        /// Message ID to reply to.
        #[arg(long)]
        reply_to: Option<String>,
    },
    /// Replace a message's text.
    Edit { id: String, content: String },
    /// Delete a message.
    Delete {
        id: String,
        /// Delete for every participant, not only for you.
        #[arg(long)]
        for_everyone: bool,
    },
    /// React to a message with an emoji.
    React { id: String, emoji: String },
    /// Remove your reaction from a message.
    Unreact { id: String },
    /// Forward a message to one or more chats.
    Forward {
        id: String,
        #[arg(required = true)]
        chat_ids: Vec<String>,
    },
    /// Search message text.
    Search {
        query: String,
        #[arg(long)]
        chat_id: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
