use serde::{Deserialize, Serialize};

use crate::models::GroupRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
}

impl CreateGroupRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            avatar: None,
            member_ids: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_members<I, S>(mut self, member_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_ids = member_ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Group info changes; only the fields set are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UpdateGroupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Group permission changes; only the fields set are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupSettingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_admins_can_message: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_admins_can_edit_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMembersRequest {
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMemberRoleRequest {
    pub role: GroupRole,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInviteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_with_only_name() {
        let request = UpdateGroupRequest::new().with_name("Climbers");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Climbers"})
        );
    }

    #[test]
    fn test_settings_update_single_flag() {
        let request = UpdateGroupSettingsRequest {
            approval_required: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"approvalRequired": false})
        );
    }

    #[test]
    fn test_create_group_payload() {
        let request = CreateGroupRequest::new("Climbers").with_members(["u2", "u3"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Climbers", "memberIds": ["u2", "u3"]})
        );
    }

    #[test]
    fn test_role_payload() {
        let request = UpdateMemberRoleRequest {
            role: GroupRole::Admin,
        };
        assert_eq!(serde_json::to_value(request).unwrap(), json!({"role": "admin"}));
    }
}
