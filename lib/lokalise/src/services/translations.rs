//! Translations.

use serde::{Deserialize, Serialize};

use crate::model::{TranslationValue, null_as_default};
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Query, Result};

/// Text of one key in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub translation_id: i64,
    pub segment_number: i64,
    pub key_id: i64,
    pub language_iso: String,
    pub translation: TranslationValue,
    pub modified_at: String,
    pub modified_at_timestamp: i64,
    pub modified_by: i64,
    pub modified_by_email: String,
    pub is_reviewed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub reviewed_by: i64,
    pub is_unverified: bool,
    pub is_fuzzy: bool,
    pub words: i64,
    pub custom_translation_statuses: Vec<TranslationStatusRef>,
    /// Zero when the translation is not part of an active task.
    #[serde(deserialize_with = "null_as_default")]
    pub task_id: i64,
}

/// Custom status as embedded in a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationStatusRef {
    pub status_id: i64,
    pub title: String,
    pub color: String,
}

/// Page of translations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslationsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub translations: Vec<Translation>,
}

impl_paginated!(TranslationsResponse);

/// Single translation reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslationResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub translation: Translation,
}

/// Translation update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTranslation {
    pub translation: TranslationValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fuzzy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reviewed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_translation_status_ids: Vec<i64>,
}

/// Filters for [`TranslationService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct TranslationListOptions {
    pub disable_references: bool,
    pub filter_lang_id: i64,
    /// `Some(false)` selects translations not reviewed yet.
    #[query(explicit_bool)]
    pub filter_is_reviewed: Option<bool>,
    #[query(explicit_bool)]
    pub filter_fuzzy: Option<bool>,
    pub filter_qa_issues: Vec<String>,
    pub filter_active_task_id: i64,
}

/// Options for [`TranslationService::retrieve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct TranslationRetrieveOptions {
    pub disable_references: bool,
}

/// Translations service.
#[derive(Debug, Clone)]
pub struct TranslationService {
    base: ServiceBase,
    list_options: TranslationListOptions,
    retrieve_options: TranslationRetrieveOptions,
}

impl_service_base!(TranslationService);

impl TranslationService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: TranslationListOptions::default(),
            retrieve_options: TranslationRetrieveOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: TranslationListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// Options applied by [`Self::retrieve`].
    #[must_use]
    pub fn with_retrieve_options(mut self, options: TranslationRetrieveOptions) -> Self {
        self.retrieve_options = options;
        self
    }

    /// List the translations of a project.
    pub async fn list(&self, project_id: &str) -> Result<TranslationsResponse> {
        self.base
            .list(&["projects", project_id, "translations"], &[&self.list_options])
            .await
    }

    /// Retrieve a translation.
    pub async fn retrieve(
        &self,
        project_id: &str,
        translation_id: i64,
    ) -> Result<TranslationResponse> {
        self.base
            .get(
                &["projects", project_id, "translations", &translation_id.to_string()],
                &[&self.retrieve_options],
            )
            .await
    }

    /// Update a translation.
    pub async fn update(
        &self,
        project_id: &str,
        translation_id: i64,
        translation: &UpdateTranslation,
    ) -> Result<TranslationResponse> {
        self.base
            .put(
                &["projects", project_id, "translations", &translation_id.to_string()],
                translation,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::ToQueryPairs;

    #[test]
    fn decodes_nullable_task_id() {
        let translation: Translation = serde_json::from_str(
            r##"{"translation_id":344412,"key_id":553662,"language_iso":"en_US",
                "translation":"Hello","is_reviewed":false,"reviewed_by":null,"task_id":null,
                "custom_translation_statuses":[
                    {"status_id":1,"title":"Approved","color":"#f2994a"}
                ]}"##,
        )
        .expect("decode");

        check!(translation.task_id == 0);
        check!(translation.reviewed_by == 0);
        check!(translation.translation == TranslationValue::from("Hello"));
        check!(translation.custom_translation_statuses[0].title == "Approved");
    }

    #[test]
    fn explicit_false_filters() {
        let options = TranslationListOptions {
            filter_lang_id: 640,
            filter_is_reviewed: Some(false),
            ..TranslationListOptions::default()
        };
        check!(
            options.to_query_pairs()
                == vec![
                    ("filter_lang_id".to_string(), "640".to_string()),
                    ("filter_is_reviewed".to_string(), "0".to_string()),
                ]
        );
    }
}
