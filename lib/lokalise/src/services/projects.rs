//! Projects.

use serde::{Deserialize, Serialize};

use crate::model::LanguageProgress;
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Query, Result};

/// A project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub project_id: String,
    pub project_type: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub created_by: i64,
    pub created_by_email: String,
    pub team_id: i64,
    pub base_language_id: i64,
    pub base_language_iso: String,
    /// Present unless listed with `include_settings=0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProjectSettings>,
    /// Present unless listed with `include_statistics=0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ProjectStatistics>,
}

/// Project feature switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    pub per_platform_key_names: bool,
    pub reviewing: bool,
    pub auto_toggle_unverified: bool,
    pub offline_translation: bool,
    pub key_editing: bool,
    pub inline_machine_translations: bool,
    pub branching: bool,
    pub segmentation: bool,
    pub custom_translation_statuses: bool,
    pub custom_translation_statuses_allow_multiple: bool,
    pub contributor_preview_download_enabled: bool,
}

/// Project progress figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectStatistics {
    pub progress_total: i64,
    pub keys_total: i64,
    pub team: i64,
    pub base_words: i64,
    pub qa_issues_total: i64,
    pub qa_issues: QaIssues,
    pub languages: Vec<LanguageProgress>,
}

/// QA issue counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaIssues {
    pub not_reviewed: i64,
    pub unverified: i64,
    pub spelling_grammar: i64,
    pub inconsistent_placeholders: i64,
    pub inconsistent_html: i64,
    pub different_number_of_urls: i64,
    pub different_urls: i64,
    pub leading_whitespace: i64,
    pub trailing_whitespace: i64,
    pub different_number_of_email_address: i64,
    pub different_email_address: i64,
    pub different_brackets: i64,
    pub different_numbers: i64,
    pub double_space: i64,
    pub special_placeholder: i64,
    pub unbalanced_brackets: i64,
}

/// Page of projects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub projects: Vec<Project>,
}

impl_paginated!(ProjectsResponse);

/// Language of a new project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectLanguage {
    pub lang_iso: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_iso: String,
}

/// Project creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<ProjectLanguage>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_lang_iso: String,
    /// `localization_files` or `paged_documents`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_segmentation_enabled: Option<bool>,
}

/// Project update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProject {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Reply of [`ProjectService::truncate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectTruncated {
    pub project_id: String,
    pub keys_deleted: bool,
}

/// Reply of [`ProjectService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectDeleted {
    pub project_id: String,
    pub project_deleted: bool,
}

/// Filters for [`ProjectService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct ProjectListOptions {
    pub filter_team_id: i64,
    pub filter_names: Vec<String>,
    /// Statistics are included by the server unless this is `Some(false)`.
    #[query(explicit_bool)]
    pub include_statistics: Option<bool>,
    /// Settings are included by the server unless this is `Some(false)`.
    #[query(explicit_bool)]
    pub include_settings: Option<bool>,
}

/// Projects service.
#[derive(Debug, Clone)]
pub struct ProjectService {
    base: ServiceBase,
    list_options: ProjectListOptions,
}

impl_service_base!(ProjectService);

impl ProjectService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: ProjectListOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: ProjectListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// List projects.
    pub async fn list(&self) -> Result<ProjectsResponse> {
        self.base.list(&["projects"], &[&self.list_options]).await
    }

    /// Create a project.
    pub async fn create(&self, project: &NewProject) -> Result<Project> {
        self.base.post(&["projects"], project).await
    }

    /// Retrieve a project.
    pub async fn retrieve(&self, project_id: &str) -> Result<Project> {
        self.base.get(&["projects", project_id], &[]).await
    }

    /// Rename or redescribe a project.
    pub async fn update(&self, project_id: &str, project: &UpdateProject) -> Result<Project> {
        self.base.put(&["projects", project_id], project).await
    }

    /// Delete every key of a project, keeping the project itself.
    pub async fn truncate(&self, project_id: &str) -> Result<ProjectTruncated> {
        self.base
            .put(&["projects", project_id, "empty"], &serde_json::Map::new())
            .await
    }

    /// Delete a project.
    pub async fn delete(&self, project_id: &str) -> Result<ProjectDeleted> {
        self.base.delete(&["projects", project_id]).await
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::ToQueryPairs;

    #[test]
    fn list_options_encoding() {
        let options = ProjectListOptions {
            filter_team_id: 12345,
            filter_names: vec!["web".to_string(), "mobile".to_string()],
            include_statistics: Some(false),
            include_settings: None,
        };

        check!(
            options.to_query_pairs()
                == vec![
                    ("filter_team_id".to_string(), "12345".to_string()),
                    ("filter_names".to_string(), "web,mobile".to_string()),
                    ("include_statistics".to_string(), "0".to_string()),
                ]
        );
    }

    #[test]
    fn empty_list_options_send_nothing() {
        check!(ProjectListOptions::default().to_query_pairs().is_empty());
    }

    #[test]
    fn new_project_omits_empty_fields() {
        let project = NewProject {
            name: "Website".to_string(),
            base_lang_iso: "en".to_string(),
            ..NewProject::default()
        };
        check!(
            serde_json::to_string(&project).expect("encode")
                == r#"{"name":"Website","base_lang_iso":"en"}"#
        );
    }
}
