//! Group CLI commands.

use clap::{Parser, Subcommand, ValueEnum};

use chatline_core::models::GroupRole as CoreGroupRole;

/// Group commands.
#[derive(Debug, Parser)]
pub struct GroupsCommand {
    #[command(subcommand)]
    pub action: GroupsAction,
}

/// Member role (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupRole {
    Admin,
    Member,
}

impl From<GroupRole> for CoreGroupRole {
    fn from(role: GroupRole) -> Self {
        match role {
            GroupRole::Admin => CoreGroupRole::Admin,
            GroupRole::Member => CoreGroupRole::Member,
        }
    }
}

/// Available group actions.
#[derive(Debug, Subcommand)]
pub enum GroupsAction {
    /// List your groups.
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get group by ID.
    Get { id: String },
    /// Create a group.
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Initial member user ID (repeatable).
        #[arg(long = "member")]
        members: Vec<String>,
    },
    /// Update group info. Only the flags given are changed.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Avatar URL.
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Delete group by ID.
    Delete { id: String },
    /// Add members to a group.
    AddMembers {
        id: String,
        #[arg(required = true)]
        user_ids: Vec<String>,
    },
    /// Remove a member from a group.
    RemoveMember { id: String, user_id: String },
    /// Change a member's role.
    SetRole {
        id: String,
        user_id: String,
        role: GroupRole,
    },
    /// Leave a group.
    Leave { id: String },
    /// Update group permissions. Only the flags given are changed.
    Settings {
        id: String,
        #[arg(long)]
        only_admins_can_message: Option<bool>,
        #[arg(long)]
        only_admins_can_edit_info: Option<bool>,
        #[arg(long)]
        approval_required: Option<bool>,
    },
    /// Create an invite link.
    Invite {
        id: String,
        #[arg(long)]
        expires_in_hours: Option<u32>,
        #[arg(long)]
        max_uses: Option<u32>,
    },
    /// Join a group with an invite code.
    Join { code: String },
}
