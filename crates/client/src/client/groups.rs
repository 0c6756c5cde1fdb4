//! Group API operations.

use chatline_core::endpoints;
use chatline_core::models::{Group, GroupInvite, GroupRole};
use chatline_core::requests::{
    AddMembersRequest, CreateGroupRequest, CreateInviteRequest, PageQuery, UpdateGroupRequest,
    UpdateGroupSettingsRequest, UpdateMemberRoleRequest,
};
use chatline_core::{json_item, json_list, ApiModule, ApiResponse};
use serde_json::Value;

use super::Transport;
use crate::error::Result;

const MODULE: ApiModule = ApiModule::Group;

/// Group lifecycle, membership and invites.
#[derive(Debug, Clone, Copy)]
pub struct GroupApi<'a> {
    transport: &'a Transport,
}

impl<'a> GroupApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn list_groups(&self, query: PageQuery) -> Result<ApiResponse<Vec<Group>>> {
        let request = self.transport.get(endpoints::GROUPS).query(&query);
        self.transport.fetch(MODULE, request, json_list).await
    }

    pub async fn get_group(&self, id: &str) -> Result<ApiResponse<Group>> {
        let request = self.transport.get(&endpoints::group(id));
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn create_group(&self, req: CreateGroupRequest) -> Result<ApiResponse<Group>> {
        let request = self.transport.post(endpoints::GROUPS).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Change group info; unset fields are left untouched.
    pub async fn update_group(
        &self,
        id: &str,
        req: UpdateGroupRequest,
    ) -> Result<ApiResponse<Group>> {
        let request = self.transport.put(&endpoints::group(id)).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn delete_group(&self, id: &str) -> Result<ApiResponse<Value>> {
        let request = self.transport.delete(&endpoints::group(id));
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn add_members<I, S>(&self, id: &str, user_ids: I) -> Result<ApiResponse<Group>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let req = AddMembersRequest {
            user_ids: user_ids.into_iter().map(Into::into).collect(),
        };
        let request = self.transport.post(&endpoints::group_members(id)).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn remove_member(&self, id: &str, user_id: &str) -> Result<ApiResponse<Value>> {
        let request = self.transport.delete(&endpoints::group_member(id, user_id));
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn update_member_role(
        &self,
        id: &str,
        user_id: &str,
        role: GroupRole,
    ) -> Result<ApiResponse<Value>> {
        let request = self
            .transport
            .put(&endpoints::group_member_role(id, user_id))
            .json(&UpdateMemberRoleRequest { role });
        self.transport.fetch_raw(MODULE, request).await
    }

    pub async fn leave_group(&self, id: &str) -> Result<ApiResponse<Value>> {
        let request = self.transport.post(&endpoints::group_leave(id));
        self.transport.fetch_raw(MODULE, request).await
    }

    /// Change group permissions; unset fields are left untouched.
    pub async fn update_settings(
        &self,
        id: &str,
        req: UpdateGroupSettingsRequest,
    ) -> Result<ApiResponse<Group>> {
        let request = self.transport.put(&endpoints::group_settings(id)).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    pub async fn create_invite(
        &self,
        id: &str,
        req: CreateInviteRequest,
    ) -> Result<ApiResponse<GroupInvite>> {
        let request = self.transport.post(&endpoints::group_invites(id)).json(&req);
        self.transport.fetch(MODULE, request, json_item).await
    }

    /// Join a group through an invite code.
    pub async fn join_by_invite(&self, code: &str) -> Result<ApiResponse<Group>> {
        let request = self.transport.post(&endpoints::group_join(code));
        self.transport.fetch(MODULE, request, json_item).await
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use chatline_core::ApiError;
    use serde_json::json;

    use super::*;
    use crate::client::test_server::{client_for, echo_body, envelope, failure, group_json};
    use crate::error::ClientError;

    #[tokio::test]
    async fn test_update_group_sends_only_set_fields() {
        let router = Router::new().route(
            "/groups/{id}",
            put(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"name": "Climbers"}));
                envelope(group_json("g1", "Climbers"))
            }),
        );
        let client = client_for(router).await;

        let group = client
            .groups()
            .update_group("g1", UpdateGroupRequest::new().with_name("Climbers"))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(group.name, "Climbers");
        assert_eq!(group.created_by, "u1");
    }

    #[tokio::test]
    async fn test_update_settings_sends_only_set_fields() {
        let router = Router::new().route(
            "/groups/{id}/settings",
            put(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"approvalRequired": true}));
                envelope(group_json("g1", "Climbers"))
            }),
        );
        let client = client_for(router).await;

        let group = client
            .groups()
            .update_settings(
                "g1",
                UpdateGroupSettingsRequest {
                    approval_required: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(group.id, "g1");
    }

    #[tokio::test]
    async fn test_list_groups() {
        let router = Router::new().route(
            "/groups",
            get(|| async { envelope(json!([group_json("g1", "One"), group_json("g2", "Two")])) }),
        );
        let client = client_for(router).await;

        let groups = client
            .groups()
            .list_groups(PageQuery::new().with_limit(2))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, "Two");
    }

    #[tokio::test]
    async fn test_member_role_body() {
        let router = Router::new().route("/groups/{id}/members/{user_id}/role", put(echo_body));
        let client = client_for(router).await;

        let response = client
            .groups()
            .update_member_role("g1", "u2", GroupRole::Admin)
            .await
            .unwrap();

        assert_eq!(response.data, Some(json!({"role": "admin"})));
    }

    #[tokio::test]
    async fn test_join_by_invite() {
        let router = Router::new().route(
            "/groups/join/{code}",
            post(|| async { envelope(group_json("g9", "Invited")) }),
        );
        let client = client_for(router).await;

        let group = client
            .groups()
            .join_by_invite("abc123")
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(group.id, "g9");
    }

    #[tokio::test]
    async fn test_join_by_invite_keeps_code_in_one_segment() {
        let router = Router::new().route(
            "/groups/join/{code}",
            post(|Path(code): Path<String>| async move { envelope(group_json("g9", &code)) }),
        );
        let client = client_for(router).await;

        for code in ["abc#123", "a/b", "x?y=1"] {
            let group = client
                .groups()
                .join_by_invite(code)
                .await
                .unwrap()
                .data
                .unwrap();
            assert_eq!(group.name, code);
        }
    }

    #[tokio::test]
    async fn test_non_admin_forbidden() {
        let router = Router::new().route(
            "/groups/{id}/settings",
            put(|| async { failure(StatusCode::FORBIDDEN, "Only admins can change settings") }),
        );
        let client = client_for(router).await;

        let error = client
            .groups()
            .update_settings(
                "g1",
                UpdateGroupSettingsRequest {
                    approval_required: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ClientError::Api(ApiError::Forbidden {
                message: "Only admins can change settings".to_string()
            })
        );
    }
}
