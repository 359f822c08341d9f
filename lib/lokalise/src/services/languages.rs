//! System and project languages.

use serde::{Deserialize, Serialize};

use crate::model::ItemError;
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub lang_id: i64,
    pub lang_iso: String,
    pub lang_name: String,
    pub is_rtl: bool,
    pub plural_forms: Vec<String>,
}

/// Page of languages, also returned by [`LanguageService::create`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LanguagesResponse {
    #[serde(skip)]
    pub paged: Paged,
    /// Empty for system languages.
    pub project_id: String,
    pub branch: Option<String>,
    pub languages: Vec<Language>,
    pub errors: Vec<ItemError>,
}

impl_paginated!(LanguagesResponse);

/// Single language reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub language: Language,
}

/// Reply of [`LanguageService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub language_deleted: bool,
}

/// Language to add to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewLanguage {
    pub lang_iso: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_iso: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_plural_forms: Vec<String>,
}

impl NewLanguage {
    /// Language with the given code.
    pub fn new(lang_iso: impl Into<String>) -> Self {
        Self {
            lang_iso: lang_iso.into(),
            ..Self::default()
        }
    }
}

/// Language update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateLanguage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_forms: Option<Vec<String>>,
}

#[derive(Serialize)]
struct NewLanguages<'a> {
    languages: &'a [NewLanguage],
}

/// Languages service.
#[derive(Debug, Clone)]
pub struct LanguageService {
    base: ServiceBase,
}

impl_service_base!(LanguageService);

impl LanguageService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List every language known to the platform.
    pub async fn list_system(&self) -> Result<LanguagesResponse> {
        self.base.list(&["system", "languages"], &[]).await
    }

    /// List the languages of a project.
    pub async fn list_project(&self, project_id: &str) -> Result<LanguagesResponse> {
        self.base.list(&["projects", project_id, "languages"], &[]).await
    }

    /// Add languages to a project.
    pub async fn create(
        &self,
        project_id: &str,
        languages: &[NewLanguage],
    ) -> Result<LanguagesResponse> {
        self.base
            .post(&["projects", project_id, "languages"], &NewLanguages { languages })
            .await
    }

    /// Retrieve a project language.
    pub async fn retrieve(&self, project_id: &str, lang_id: i64) -> Result<LanguageResponse> {
        self.base
            .get(&["projects", project_id, "languages", &lang_id.to_string()], &[])
            .await
    }

    /// Update a project language.
    pub async fn update(
        &self,
        project_id: &str,
        lang_id: i64,
        language: &UpdateLanguage,
    ) -> Result<LanguageResponse> {
        self.base
            .put(&["projects", project_id, "languages", &lang_id.to_string()], language)
            .await
    }

    /// Remove a language from a project.
    pub async fn delete(&self, project_id: &str, lang_id: i64) -> Result<LanguageDeleted> {
        self.base
            .delete(&["projects", project_id, "languages", &lang_id.to_string()])
            .await
    }
}
