//! Teams.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub plan: String,
    pub quota_usage: Quota,
    pub quota_allowed: Quota,
}

/// Usage or allowance counters of a team plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    pub users: i64,
    pub keys: i64,
    pub projects: i64,
    pub mau: i64,
}

/// Page of teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeamsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub teams: Vec<Team>,
}

impl_paginated!(TeamsResponse);

/// Teams service.
#[derive(Debug, Clone)]
pub struct TeamService {
    base: ServiceBase,
}

impl_service_base!(TeamService);

impl TeamService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the teams the token owner belongs to.
    pub async fn list(&self) -> Result<TeamsResponse> {
        self.base.list(&["teams"], &[]).await
    }
}
