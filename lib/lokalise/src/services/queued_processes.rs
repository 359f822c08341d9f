//! Queued server-side processes such as file imports.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// An asynchronous job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueuedProcess {
    pub process_id: String,
    /// Job kind, `file-import` for uploads.
    #[serde(rename = "type")]
    pub kind: String,
    /// `queued`, `running`, `finished`, `cancelled` or `failed`.
    pub status: String,
    pub message: String,
    pub created_by: i64,
    pub created_by_email: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    /// Kind-specific progress details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl QueuedProcess {
    /// Returns `true` once the job stopped, successfully or not.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.status.as_str(), "finished" | "cancelled" | "failed")
    }
}

/// Page of processes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueuedProcessesResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub processes: Vec<QueuedProcess>,
}

impl_paginated!(QueuedProcessesResponse);

/// Single process reply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueuedProcessResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub process: QueuedProcess,
}

/// Queued processes service.
#[derive(Debug, Clone)]
pub struct QueuedProcessService {
    base: ServiceBase,
}

impl_service_base!(QueuedProcessService);

impl QueuedProcessService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the processes of a project.
    pub async fn list(&self, project_id: &str) -> Result<QueuedProcessesResponse> {
        self.base.list(&["projects", project_id, "processes"], &[]).await
    }

    /// Retrieve a process, typically to poll its status.
    pub async fn retrieve(
        &self,
        project_id: &str,
        process_id: &str,
    ) -> Result<QueuedProcessResponse> {
        self.base
            .get(&["projects", project_id, "processes", process_id], &[])
            .await
    }
}
