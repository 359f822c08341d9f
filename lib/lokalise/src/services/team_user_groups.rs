//! Team user groups.

use serde::{Deserialize, Serialize};

use super::contributors::ContributorLanguage;
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A group of team members sharing permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    pub group_id: i64,
    pub name: String,
    pub permissions: GroupPermissions,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub team_id: i64,
    pub projects: Vec<String>,
    pub members: Vec<i64>,
}

/// Permissions granted by a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupPermissions {
    pub is_admin: bool,
    pub is_reviewer: bool,
    pub admin_rights: Vec<String>,
    pub languages: Vec<ContributorLanguage>,
}

/// Page of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserGroupsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub team_id: i64,
    pub user_groups: Vec<UserGroup>,
}

impl_paginated!(UserGroupsResponse);

/// Group reply of create, update and membership changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserGroupResponse {
    pub team_id: i64,
    pub group: UserGroup,
}

/// Reply of [`UserGroupService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserGroupDeleted {
    pub team_id: i64,
    pub group_deleted: bool,
}

/// Languages a group may read and write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupLanguages {
    /// Readable language ids.
    pub reference: Vec<i64>,
    /// Writable language ids.
    pub contributable: Vec<i64>,
}

/// Group creation and update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUserGroup {
    pub name: String,
    pub is_reviewer: bool,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub admin_rights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<GroupLanguages>,
}

#[derive(Serialize)]
struct ProjectIds<'a> {
    projects: &'a [&'a str],
}

#[derive(Serialize)]
struct UserIds<'a> {
    users: &'a [i64],
}

/// Team user groups service.
#[derive(Debug, Clone)]
pub struct UserGroupService {
    base: ServiceBase,
}

impl_service_base!(UserGroupService);

impl UserGroupService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the groups of a team.
    pub async fn list(&self, team_id: i64) -> Result<UserGroupsResponse> {
        self.base
            .list(&["teams", &team_id.to_string(), "groups"], &[])
            .await
    }

    /// Create a group.
    pub async fn create(&self, team_id: i64, group: &NewUserGroup) -> Result<UserGroupResponse> {
        self.base
            .post(&["teams", &team_id.to_string(), "groups"], group)
            .await
    }

    /// Retrieve a group.
    pub async fn retrieve(&self, team_id: i64, group_id: i64) -> Result<UserGroup> {
        self.base
            .get(&["teams", &team_id.to_string(), "groups", &group_id.to_string()], &[])
            .await
    }

    /// Replace the settings of a group.
    pub async fn update(
        &self,
        team_id: i64,
        group_id: i64,
        group: &NewUserGroup,
    ) -> Result<UserGroupResponse> {
        self.base
            .put(
                &["teams", &team_id.to_string(), "groups", &group_id.to_string()],
                group,
            )
            .await
    }

    /// Delete a group.
    pub async fn delete(&self, team_id: i64, group_id: i64) -> Result<UserGroupDeleted> {
        self.base
            .delete(&["teams", &team_id.to_string(), "groups", &group_id.to_string()])
            .await
    }

    /// Give the group access to projects.
    pub async fn add_projects(
        &self,
        team_id: i64,
        group_id: i64,
        project_ids: &[&str],
    ) -> Result<UserGroupResponse> {
        self.change_projects(team_id, group_id, "add", project_ids).await
    }

    /// Revoke the group's access to projects.
    pub async fn remove_projects(
        &self,
        team_id: i64,
        group_id: i64,
        project_ids: &[&str],
    ) -> Result<UserGroupResponse> {
        self.change_projects(team_id, group_id, "remove", project_ids).await
    }

    /// Add team members to the group.
    pub async fn add_members(
        &self,
        team_id: i64,
        group_id: i64,
        user_ids: &[i64],
    ) -> Result<UserGroupResponse> {
        self.change_members(team_id, group_id, "add", user_ids).await
    }

    /// Remove team members from the group.
    pub async fn remove_members(
        &self,
        team_id: i64,
        group_id: i64,
        user_ids: &[i64],
    ) -> Result<UserGroupResponse> {
        self.change_members(team_id, group_id, "remove", user_ids).await
    }

    async fn change_projects(
        &self,
        team_id: i64,
        group_id: i64,
        action: &str,
        projects: &[&str],
    ) -> Result<UserGroupResponse> {
        let team_id = team_id.to_string();
        let group_id = group_id.to_string();
        self.base
            .put(
                &["teams", &team_id, "groups", &group_id, "projects", action],
                &ProjectIds { projects },
            )
            .await
    }

    async fn change_members(
        &self,
        team_id: i64,
        group_id: i64,
        action: &str,
        users: &[i64],
    ) -> Result<UserGroupResponse> {
        let team_id = team_id.to_string();
        let group_id = group_id.to_string();
        self.base
            .put(
                &["teams", &team_id, "groups", &group_id, "members", action],
                &UserIds { users },
            )
            .await
    }
}
