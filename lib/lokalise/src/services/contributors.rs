//! Project contributors.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A user with access to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    pub user_id: i64,
    pub email: String,
    pub fullname: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub is_admin: bool,
    pub is_reviewer: bool,
    pub languages: Vec<ContributorLanguage>,
    pub admin_rights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}

/// Language access of a contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributorLanguage {
    pub lang_id: i64,
    pub lang_iso: String,
    pub lang_name: String,
    pub is_writable: bool,
}

/// Page of contributors, also returned by [`ContributorService::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContributorsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub contributors: Vec<Contributor>,
}

impl_paginated!(ContributorsResponse);

/// Single contributor reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContributorResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub contributor: Contributor,
}

/// Reply of [`ContributorService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContributorDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub contributor_deleted: bool,
}

/// Language access granted to a contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContributorLanguageAccess {
    pub lang_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_writable: Option<bool>,
}

/// Contributor invitation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewContributor {
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fullname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reviewer: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<ContributorLanguageAccess>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub admin_rights: Vec<String>,
}

/// Contributor permission update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateContributor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reviewer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<ContributorLanguageAccess>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_rights: Option<Vec<String>>,
}

#[derive(Serialize)]
struct NewContributors<'a> {
    contributors: &'a [NewContributor],
}

/// Contributors service.
#[derive(Debug, Clone)]
pub struct ContributorService {
    base: ServiceBase,
}

impl_service_base!(ContributorService);

impl ContributorService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the contributors of a project.
    pub async fn list(&self, project_id: &str) -> Result<ContributorsResponse> {
        self.base
            .list(&["projects", project_id, "contributors"], &[])
            .await
    }

    /// Invite contributors.
    pub async fn create(
        &self,
        project_id: &str,
        contributors: &[NewContributor],
    ) -> Result<ContributorsResponse> {
        self.base
            .post(
                &["projects", project_id, "contributors"],
                &NewContributors { contributors },
            )
            .await
    }

    /// Retrieve a contributor.
    pub async fn retrieve(&self, project_id: &str, user_id: i64) -> Result<ContributorResponse> {
        self.base
            .get(
                &["projects", project_id, "contributors", &user_id.to_string()],
                &[],
            )
            .await
    }

    /// Retrieve the contributor owning the API token.
    pub async fn retrieve_me(&self, project_id: &str) -> Result<ContributorResponse> {
        self.base
            .get(&["projects", project_id, "contributors", "me"], &[])
            .await
    }

    /// Change a contributor's permissions.
    pub async fn update(
        &self,
        project_id: &str,
        user_id: i64,
        contributor: &UpdateContributor,
    ) -> Result<ContributorResponse> {
        self.base
            .put(
                &["projects", project_id, "contributors", &user_id.to_string()],
                contributor,
            )
            .await
    }

    /// Remove a contributor from a project.
    pub async fn delete(&self, project_id: &str, user_id: i64) -> Result<ContributorDeleted> {
        self.base
            .delete(&["projects", project_id, "contributors", &user_id.to_string()])
            .await
    }
}
