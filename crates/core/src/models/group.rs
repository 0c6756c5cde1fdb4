use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRole {
    Owner,
    Admin,
    #[default]
    Member,
}

impl GroupRole {
    /// Owners and admins may manage members and settings.
    pub fn can_manage(self) -> bool {
        matches!(self, GroupRole::Owner | GroupRole::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: GroupRole,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSettings {
    #[serde(default)]
    pub only_admins_can_message: bool,
    #[serde(default)]
    pub only_admins_can_edit_info: bool,
    #[serde(default)]
    pub approval_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_by: String,
    #[serde(default)]
    pub members: Vec<GroupMember>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub settings: GroupSettings,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Group {
    /// Role of a user in this group, if they are a member.
    pub fn role_of(&self, user_id: &str) -> Option<GroupRole> {
        self.members
            .iter()
            .find(|member| member.user_id == user_id)
            .map(|member| member.role)
    }
}

/// An invite link for joining a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInvite {
    pub code: String,
    pub group_id: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub uses: u32,
}

impl GroupInvite {
    /// Whether the invite can still be used at `now`.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        let not_expired = self.expires_at.is_none_or(|expires_at| now < expires_at);
        let uses_left = self.max_uses.is_none_or(|max_uses| self.uses < max_uses);
        not_expired && uses_left
    }
}
