//! Project webhooks.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub webhook_id: String,
    pub url: String,
    /// Sent as `X-Secret` with every delivery.
    pub secret: String,
    pub events: Vec<String>,
    pub event_lang_map: Vec<EventLanguages>,
}

/// Languages an event is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLanguages {
    pub event: String,
    pub lang_iso_codes: Vec<String>,
}

/// Page of webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebhooksResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub webhooks: Vec<Webhook>,
}

impl_paginated!(WebhooksResponse);

/// Single webhook reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebhookResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub webhook: Webhook,
}

/// Reply of [`WebhookService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebhookDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub webhook_deleted: bool,
}

/// Reply of [`WebhookService::regenerate_secret`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebhookSecret {
    pub project_id: String,
    pub branch: Option<String>,
    pub secret: String,
}

/// Webhook creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewWebhook {
    pub url: String,
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event_lang_map: Vec<EventLanguages>,
}

/// Webhook update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_lang_map: Option<Vec<EventLanguages>>,
}

/// Webhooks service.
#[derive(Debug, Clone)]
pub struct WebhookService {
    base: ServiceBase,
}

impl_service_base!(WebhookService);

impl WebhookService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the webhooks of a project.
    pub async fn list(&self, project_id: &str) -> Result<WebhooksResponse> {
        self.base.list(&["projects", project_id, "webhooks"], &[]).await
    }

    /// Create a webhook.
    pub async fn create(&self, project_id: &str, webhook: &NewWebhook) -> Result<WebhookResponse> {
        self.base
            .post(&["projects", project_id, "webhooks"], webhook)
            .await
    }

    /// Retrieve a webhook.
    pub async fn retrieve(&self, project_id: &str, webhook_id: &str) -> Result<WebhookResponse> {
        self.base
            .get(&["projects", project_id, "webhooks", webhook_id], &[])
            .await
    }

    /// Update a webhook.
    pub async fn update(
        &self,
        project_id: &str,
        webhook_id: &str,
        webhook: &UpdateWebhook,
    ) -> Result<WebhookResponse> {
        self.base
            .put(&["projects", project_id, "webhooks", webhook_id], webhook)
            .await
    }

    /// Delete a webhook.
    pub async fn delete(&self, project_id: &str, webhook_id: &str) -> Result<WebhookDeleted> {
        self.base
            .delete(&["projects", project_id, "webhooks", webhook_id])
            .await
    }

    /// Issue a new delivery secret.
    pub async fn regenerate_secret(
        &self,
        project_id: &str,
        webhook_id: &str,
    ) -> Result<WebhookSecret> {
        self.base
            .patch(
                &["projects", project_id, "webhooks", webhook_id, "secret", "regenerate"],
                &serde_json::Map::new(),
            )
            .await
    }
}
