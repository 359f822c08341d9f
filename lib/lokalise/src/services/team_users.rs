//! Team members.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// Role of a user within a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamUserRole {
    Owner,
    Admin,
    #[default]
    Member,
    Biller,
    /// Role not known to this client.
    #[serde(other)]
    Unknown,
}

/// A team member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamUser {
    pub user_id: i64,
    pub email: String,
    pub fullname: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub role: TeamUserRole,
}

/// Page of team members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeamUsersResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub team_id: i64,
    pub team_users: Vec<TeamUser>,
}

impl_paginated!(TeamUsersResponse);

/// Single team member reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeamUserResponse {
    pub team_id: i64,
    pub team_user: TeamUser,
}

/// Reply of [`TeamUserService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeamUserDeleted {
    pub team_id: i64,
    pub team_user_deleted: bool,
}

#[derive(Serialize)]
struct RoleChange {
    role: TeamUserRole,
}

/// Team members service.
#[derive(Debug, Clone)]
pub struct TeamUserService {
    base: ServiceBase,
}

impl_service_base!(TeamUserService);

impl TeamUserService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the members of a team.
    pub async fn list(&self, team_id: i64) -> Result<TeamUsersResponse> {
        self.base
            .list(&["teams", &team_id.to_string(), "users"], &[])
            .await
    }

    /// Retrieve a team member.
    pub async fn retrieve(&self, team_id: i64, user_id: i64) -> Result<TeamUserResponse> {
        self.base
            .get(&["teams", &team_id.to_string(), "users", &user_id.to_string()], &[])
            .await
    }

    /// Change the role of a team member.
    pub async fn update(
        &self,
        team_id: i64,
        user_id: i64,
        role: TeamUserRole,
    ) -> Result<TeamUserResponse> {
        self.base
            .put(
                &["teams", &team_id.to_string(), "users", &user_id.to_string()],
                &RoleChange { role },
            )
            .await
    }

    /// Remove a member from a team.
    pub async fn delete(&self, team_id: i64, user_id: i64) -> Result<TeamUserDeleted> {
        self.base
            .delete(&["teams", &team_id.to_string(), "users", &user_id.to_string()])
            .await
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn roles_are_lowercase() {
        let change = RoleChange {
            role: TeamUserRole::Admin,
        };
        check!(serde_json::to_string(&change).expect("encode") == r#"{"role":"admin"}"#);
        let role: TeamUserRole = serde_json::from_str(r#""translator""#).expect("decode");
        check!(role == TeamUserRole::Unknown);
    }
}
