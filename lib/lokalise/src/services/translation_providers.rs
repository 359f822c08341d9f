//! Translation providers available for orders.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A translation provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationProvider {
    pub provider_id: i64,
    pub name: String,
    pub slug: String,
    pub price_pair_min: String,
    pub website_url: String,
    pub description: String,
    pub tiers: Vec<ProviderTier>,
    pub pairs: Vec<ProviderPair>,
}

/// Quality tier offered by a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderTier {
    pub tier_id: i64,
    pub title: String,
}

/// Language pair offered by a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderPair {
    pub tier_id: i64,
    pub from_lang_iso: String,
    pub from_lang_name: String,
    pub to_lang_iso: String,
    pub to_lang_name: String,
    pub price_per_word: f64,
}

/// Page of providers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TranslationProvidersResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub translation_providers: Vec<TranslationProvider>,
}

impl_paginated!(TranslationProvidersResponse);

/// Translation providers service.
#[derive(Debug, Clone)]
pub struct TranslationProviderService {
    base: ServiceBase,
}

impl_service_base!(TranslationProviderService);

impl TranslationProviderService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the providers available to a team.
    pub async fn list(&self, team_id: i64) -> Result<TranslationProvidersResponse> {
        self.base
            .list(&["teams", &team_id.to_string(), "translation_providers"], &[])
            .await
    }

    /// Retrieve a provider.
    pub async fn retrieve(&self, team_id: i64, provider_id: i64) -> Result<TranslationProvider> {
        self.base
            .get(
                &[
                    "teams",
                    &team_id.to_string(),
                    "translation_providers",
                    &provider_id.to_string(),
                ],
                &[],
            )
            .await
    }
}
