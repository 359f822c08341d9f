//! Professional translation orders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A translation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_id: String,
    pub project_id: String,
    pub branch: Option<String>,
    pub card_id: i64,
    pub status: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub created_by: i64,
    pub created_by_email: String,
    pub source_language_iso: String,
    pub target_language_isos: Vec<String>,
    pub keys: Vec<i64>,
    /// Word count per target language.
    pub source_words: BTreeMap<String, i64>,
    pub provider_slug: String,
    pub translation_style: String,
    pub translation_tier: i64,
    pub translation_tier_name: String,
    pub briefing: String,
    pub is_saved_to_translation_memory: bool,
    pub total: f64,
    pub dry_run: bool,
}

/// Page of orders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrdersResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub orders: Vec<Order>,
}

impl_paginated!(OrdersResponse);

/// Order creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    pub project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub branch: String,
    pub card_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub briefing: String,
    pub source_language_iso: String,
    pub target_language_isos: Vec<String>,
    pub keys: Vec<i64>,
    pub provider_slug: String,
    pub translation_tier: i64,
    /// Compute the price without placing the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub translation_style: String,
}

/// Orders service.
#[derive(Debug, Clone)]
pub struct OrderService {
    base: ServiceBase,
}

impl_service_base!(OrderService);

impl OrderService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the orders of a team.
    pub async fn list(&self, team_id: i64) -> Result<OrdersResponse> {
        self.base
            .list(&["teams", &team_id.to_string(), "orders"], &[])
            .await
    }

    /// Place an order.
    pub async fn create(&self, team_id: i64, order: &NewOrder) -> Result<Order> {
        self.base
            .post(&["teams", &team_id.to_string(), "orders"], order)
            .await
    }

    /// Retrieve an order.
    pub async fn retrieve(&self, team_id: i64, order_id: &str) -> Result<Order> {
        self.base
            .get(&["teams", &team_id.to_string(), "orders", order_id], &[])
            .await
    }
}
