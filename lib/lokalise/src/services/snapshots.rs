//! Project snapshots.

use serde::{Deserialize, Serialize};

use super::projects::Project;
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Query, Result};

/// A point-in-time copy of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub snapshot_id: i64,
    pub title: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub created_by: i64,
    pub created_by_email: String,
}

/// Page of snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnapshotsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub snapshots: Vec<Snapshot>,
}

impl_paginated!(SnapshotsResponse);

/// Single snapshot reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnapshotResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub snapshot: Snapshot,
}

/// Reply of [`SnapshotService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnapshotDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub snapshot_deleted: bool,
}

/// Filters for [`SnapshotService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct SnapshotListOptions {
    pub filter_title: String,
}

#[derive(Serialize)]
struct NewSnapshot<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    title: &'a str,
}

/// Snapshots service.
#[derive(Debug, Clone)]
pub struct SnapshotService {
    base: ServiceBase,
    list_options: SnapshotListOptions,
}

impl_service_base!(SnapshotService);

impl SnapshotService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: SnapshotListOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: SnapshotListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// List the snapshots of a project.
    pub async fn list(&self, project_id: &str) -> Result<SnapshotsResponse> {
        self.base
            .list(&["projects", project_id, "snapshots"], &[&self.list_options])
            .await
    }

    /// Take a snapshot; an empty title lets the server name it.
    pub async fn create(&self, project_id: &str, title: &str) -> Result<SnapshotResponse> {
        self.base
            .post(&["projects", project_id, "snapshots"], &NewSnapshot { title })
            .await
    }

    /// Restore a snapshot as a new project, returned by the call.
    pub async fn restore(&self, project_id: &str, snapshot_id: i64) -> Result<Project> {
        self.base
            .post(
                &["projects", project_id, "snapshots", &snapshot_id.to_string()],
                &serde_json::Map::new(),
            )
            .await
    }

    /// Delete a snapshot.
    pub async fn delete(&self, project_id: &str, snapshot_id: i64) -> Result<SnapshotDeleted> {
        self.base
            .delete(&["projects", project_id, "snapshots", &snapshot_id.to_string()])
            .await
    }
}
