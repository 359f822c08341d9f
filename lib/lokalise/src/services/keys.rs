//! Keys.

use serde::{Deserialize, Serialize};

use super::comments::{Comment, NewComment};
use super::screenshots::Screenshot;
use super::translations::Translation;
use crate::model::{CustomAttributes, ItemError, KeyName, PlatformNames, TranslationValue};
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Query, Result};

/// A translation key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    pub key_id: i64,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub key_name: KeyName,
    pub filenames: PlatformNames,
    pub description: String,
    pub platforms: Vec<String>,
    pub tags: Vec<String>,
    pub comments: Vec<Comment>,
    pub screenshots: Vec<Screenshot>,
    pub translations: Vec<Translation>,
    pub is_plural: bool,
    pub plural_name: String,
    pub is_hidden: bool,
    pub is_archived: bool,
    pub context: String,
    pub base_words: i64,
    pub char_limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<CustomAttributes>,
    pub modified_at: String,
    pub modified_at_timestamp: i64,
    pub translations_modified_at: String,
    pub translations_modified_at_timestamp: i64,
}

/// Page of keys, also returned by batch creates and updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeysResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub keys: Vec<Key>,
    /// Items rejected by a batch call; the others were applied.
    pub errors: Vec<ItemError>,
}

impl_paginated!(KeysResponse);

/// Single key reply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeyResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub key: Key,
}

/// Translation supplied with a new key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewKeyTranslation {
    pub language_iso: String,
    pub translation: TranslationValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fuzzy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reviewed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_translation_status_ids: Vec<i64>,
}

/// Key creation payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewKey {
    pub key_name: KeyName,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub platforms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filenames: Option<PlatformNames>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<NewComment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<NewKeyTranslation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_plural: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plural_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<CustomAttributes>,
}

/// Key update payload; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<KeyName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filenames: Option<PlatformNames>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Append `tags` instead of replacing the current ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_plural: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<CustomAttributes>,
}

/// One entry of a bulk update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkUpdateKey {
    pub key_id: i64,
    #[serde(flatten)]
    pub update: UpdateKey,
}

/// Reply of [`KeyService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub key_removed: bool,
    pub keys_locked: i64,
}

/// Reply of [`KeyService::bulk_delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeysDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub keys_removed: bool,
    /// Keys kept because they are locked by a task.
    pub keys_locked: i64,
}

/// Filters for [`KeyService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct KeyListOptions {
    pub disable_references: bool,
    pub include_comments: bool,
    pub include_screenshots: bool,
    pub include_translations: bool,
    pub filter_translation_lang_ids: Vec<i64>,
    pub filter_tags: Vec<String>,
    pub filter_filenames: Vec<String>,
    pub filter_keys: Vec<String>,
    pub filter_key_ids: Vec<i64>,
    pub filter_platforms: Vec<String>,
    pub filter_untranslated: bool,
    pub filter_qa_issues: Vec<String>,
    /// `include`, `exclude` or `only`.
    pub filter_archived: String,
}

/// Options for [`KeyService::retrieve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct KeyRetrieveOptions {
    pub disable_references: bool,
}

#[derive(Serialize)]
struct NewKeys<'a> {
    keys: &'a [NewKey],
}

#[derive(Serialize)]
struct BulkUpdateKeys<'a> {
    keys: &'a [BulkUpdateKey],
}

#[derive(Serialize)]
struct KeyIds<'a> {
    keys: &'a [i64],
}

/// Keys service.
#[derive(Debug, Clone)]
pub struct KeyService {
    base: ServiceBase,
    list_options: KeyListOptions,
    retrieve_options: KeyRetrieveOptions,
}

impl_service_base!(KeyService);

impl KeyService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: KeyListOptions::default(),
            retrieve_options: KeyRetrieveOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: KeyListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// Options applied by [`Self::retrieve`].
    #[must_use]
    pub fn with_retrieve_options(mut self, options: KeyRetrieveOptions) -> Self {
        self.retrieve_options = options;
        self
    }

    /// List the keys of a project.
    pub async fn list(&self, project_id: &str) -> Result<KeysResponse> {
        self.base
            .list(&["projects", project_id, "keys"], &[&self.list_options])
            .await
    }

    /// Create keys in one batch.
    ///
    /// Rejected keys are reported in [`KeysResponse::errors`].
    pub async fn create(&self, project_id: &str, keys: &[NewKey]) -> Result<KeysResponse> {
        self.base
            .post(&["projects", project_id, "keys"], &NewKeys { keys })
            .await
    }

    /// Retrieve a key.
    pub async fn retrieve(&self, project_id: &str, key_id: i64) -> Result<KeyResponse> {
        self.base
            .get(
                &["projects", project_id, "keys", &key_id.to_string()],
                &[&self.retrieve_options],
            )
            .await
    }

    /// Update a key.
    pub async fn update(
        &self,
        project_id: &str,
        key_id: i64,
        key: &UpdateKey,
    ) -> Result<KeyResponse> {
        self.base
            .put(&["projects", project_id, "keys", &key_id.to_string()], key)
            .await
    }

    /// Update several keys in one call.
    pub async fn bulk_update(
        &self,
        project_id: &str,
        keys: &[BulkUpdateKey],
    ) -> Result<KeysResponse> {
        self.base
            .put(&["projects", project_id, "keys"], &BulkUpdateKeys { keys })
            .await
    }

    /// Delete a key.
    pub async fn delete(&self, project_id: &str, key_id: i64) -> Result<KeyDeleted> {
        self.base
            .delete(&["projects", project_id, "keys", &key_id.to_string()])
            .await
    }

    /// Delete several keys in one call.
    pub async fn bulk_delete(&self, project_id: &str, key_ids: &[i64]) -> Result<KeysDeleted> {
        self.base
            .delete_with_body(&["projects", project_id, "keys"], &KeyIds { keys: key_ids })
            .await
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use insta::assert_snapshot;

    use super::*;
    use crate::{RequestOption, ToQueryPairs};

    #[test]
    fn list_options_encoding() {
        let options = KeyListOptions {
            include_translations: true,
            filter_tags: vec!["web".to_string(), "ios".to_string()],
            filter_key_ids: vec![7],
            filter_archived: "exclude".to_string(),
            ..KeyListOptions::default()
        };

        let url = url::Url::parse("https://api.lokalise.co/api2/projects/P/keys").expect("url");
        let mut request = crate::RequestBuilder::new(crate::Method::Get, url);
        options.apply_to(&mut request);

        assert_snapshot!(
            request.url().query().unwrap_or_default(),
            @"include_translations=1&filter_tags=web%2Cios&filter_key_ids=7&filter_archived=exclude"
        );
    }

    #[test]
    fn retrieve_options_default_is_empty() {
        check!(KeyRetrieveOptions::default().to_query_pairs().is_empty());
    }

    #[test]
    fn bulk_update_flattens_changes() {
        let update = BulkUpdateKey {
            key_id: 42,
            update: UpdateKey {
                description: Some("Title".to_string()),
                tags: Some(vec!["home".to_string()]),
                merge_tags: Some(true),
                ..UpdateKey::default()
            },
        };

        assert_snapshot!(
            serde_json::to_string(&BulkUpdateKeys { keys: &[update] }).expect("encode"),
            @r#"{"keys":[{"key_id":42,"description":"Title","tags":["home"],"merge_tags":true}]}"#
        );
    }

    #[test]
    fn keys_response_with_errors() {
        let response: KeysResponse = serde_json::from_str(
            r#"{"project_id":"P",
                "keys":[{"key_id":1,
                    "key_name":{"ios":"a","android":"b","web":"c","other":"d"}}],
                "errors":[{"message":"This key name is already taken","code":400,
                    "key_name":{"ios":"x"}}]}"#,
        )
        .expect("decode");

        check!(response.keys.len() == 1);
        check!(response.errors.len() == 1);
        check!(response.errors[0].code == 400);
    }
}
