//! Custom translation statuses.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A custom translation status of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationStatus {
    pub status_id: i64,
    pub title: String,
    /// Hex color, one of [`TranslationStatusService::available_colors`].
    pub color: String,
}

/// Page of statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslationStatusesResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub custom_translation_statuses: Vec<TranslationStatus>,
}

impl_paginated!(TranslationStatusesResponse);

/// Single status reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslationStatusResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub custom_translation_status: TranslationStatus,
}

/// Reply of [`TranslationStatusService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslationStatusDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub custom_translation_status_deleted: bool,
}

/// Colors accepted for statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusColors {
    pub colors: Vec<String>,
}

/// Status creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewTranslationStatus {
    pub title: String,
    pub color: String,
}

/// Status update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTranslationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Custom translation statuses service.
#[derive(Debug, Clone)]
pub struct TranslationStatusService {
    base: ServiceBase,
}

impl_service_base!(TranslationStatusService);

const STATUSES: &str = "custom_translation_statuses";

impl TranslationStatusService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the statuses of a project.
    pub async fn list(&self, project_id: &str) -> Result<TranslationStatusesResponse> {
        self.base.list(&["projects", project_id, STATUSES], &[]).await
    }

    /// Create a status.
    pub async fn create(
        &self,
        project_id: &str,
        status: &NewTranslationStatus,
    ) -> Result<TranslationStatusResponse> {
        self.base.post(&["projects", project_id, STATUSES], status).await
    }

    /// Retrieve a status.
    pub async fn retrieve(
        &self,
        project_id: &str,
        status_id: i64,
    ) -> Result<TranslationStatusResponse> {
        self.base
            .get(&["projects", project_id, STATUSES, &status_id.to_string()], &[])
            .await
    }

    /// Update a status.
    pub async fn update(
        &self,
        project_id: &str,
        status_id: i64,
        status: &UpdateTranslationStatus,
    ) -> Result<TranslationStatusResponse> {
        self.base
            .put(&["projects", project_id, STATUSES, &status_id.to_string()], status)
            .await
    }

    /// Delete a status.
    pub async fn delete(
        &self,
        project_id: &str,
        status_id: i64,
    ) -> Result<TranslationStatusDeleted> {
        self.base
            .delete(&["projects", project_id, STATUSES, &status_id.to_string()])
            .await
    }

    /// Colors a status may use.
    pub async fn available_colors(&self, project_id: &str) -> Result<StatusColors> {
        self.base
            .get(&["projects", project_id, STATUSES, "colors"], &[])
            .await
    }
}
