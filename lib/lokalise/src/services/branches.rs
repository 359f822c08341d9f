//! Project branches.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branch {
    pub branch_id: i64,
    pub name: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub created_by: i64,
    pub created_by_email: String,
}

/// Page of branches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BranchesResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branches: Vec<Branch>,
}

impl_paginated!(BranchesResponse);

/// Single branch reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BranchResponse {
    pub project_id: String,
    pub branch: Branch,
}

/// Reply of [`BranchService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BranchDeleted {
    pub project_id: String,
    pub branch_deleted: bool,
}

/// Reply of [`BranchService::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BranchMerged {
    pub project_id: String,
    pub branch_merged: bool,
    pub branch: Branch,
    pub target_branch: Branch,
}

/// Merge options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeBranch {
    /// `source` or `target`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub force_conflict_resolve_using: String,
    /// Defaults to the master branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_branch_id: Option<i64>,
}

#[derive(Serialize)]
struct BranchName<'a> {
    name: &'a str,
}

/// Branches service.
#[derive(Debug, Clone)]
pub struct BranchService {
    base: ServiceBase,
}

impl_service_base!(BranchService);

impl BranchService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the branches of a project.
    pub async fn list(&self, project_id: &str) -> Result<BranchesResponse> {
        self.base.list(&["projects", project_id, "branches"], &[]).await
    }

    /// Create a branch.
    pub async fn create(&self, project_id: &str, name: &str) -> Result<BranchResponse> {
        self.base
            .post(&["projects", project_id, "branches"], &BranchName { name })
            .await
    }

    /// Retrieve a branch.
    pub async fn retrieve(&self, project_id: &str, branch_id: i64) -> Result<BranchResponse> {
        self.base
            .get(&["projects", project_id, "branches", &branch_id.to_string()], &[])
            .await
    }

    /// Rename a branch.
    pub async fn update(
        &self,
        project_id: &str,
        branch_id: i64,
        name: &str,
    ) -> Result<BranchResponse> {
        self.base
            .put(
                &["projects", project_id, "branches", &branch_id.to_string()],
                &BranchName { name },
            )
            .await
    }

    /// Delete a branch.
    pub async fn delete(&self, project_id: &str, branch_id: i64) -> Result<BranchDeleted> {
        self.base
            .delete(&["projects", project_id, "branches", &branch_id.to_string()])
            .await
    }

    /// Merge a branch into another one.
    pub async fn merge(
        &self,
        project_id: &str,
        branch_id: i64,
        merge: &MergeBranch,
    ) -> Result<BranchMerged> {
        self.base
            .post(
                &["projects", project_id, "branches", &branch_id.to_string(), "merge"],
                merge,
            )
            .await
    }
}
