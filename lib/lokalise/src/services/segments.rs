//! Translation segments of a key.

use serde::{Deserialize, Serialize};

use super::translations::TranslationStatusRef;
use crate::model::{TranslationValue, null_as_default};
use crate::service::{ServiceBase, impl_service_base};
use crate::{Query, Result};

/// One sentence-level piece of a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub segment_number: i64,
    pub language_iso: String,
    pub modified_at: String,
    pub modified_at_timestamp: i64,
    pub modified_by: i64,
    pub modified_by_email: String,
    pub value: TranslationValue,
    pub is_fuzzy: bool,
    pub is_reviewed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub reviewed_by: i64,
    pub words: i64,
    pub custom_translation_statuses: Vec<TranslationStatusRef>,
}

/// Segments of a key in one language. Not paginated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SegmentsResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub key_id: i64,
    pub language_iso: String,
    pub segments: Vec<Segment>,
}

/// Single segment reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SegmentResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub key_id: i64,
    pub language_iso: String,
    pub segment: Segment,
}

/// Segment update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSegment {
    pub value: TranslationValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fuzzy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reviewed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_translation_status_ids: Vec<i64>,
}

/// Filters for [`SegmentService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct SegmentListOptions {
    pub disable_references: bool,
    #[query(explicit_bool)]
    pub filter_is_reviewed: Option<bool>,
    pub filter_unverified: bool,
    pub filter_untranslated: bool,
    pub filter_qa_issues: Vec<String>,
}

/// Segments service.
#[derive(Debug, Clone)]
pub struct SegmentService {
    base: ServiceBase,
    list_options: SegmentListOptions,
}

impl_service_base!(SegmentService);

impl SegmentService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: SegmentListOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: SegmentListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// List the segments of a key in one language.
    pub async fn list(
        &self,
        project_id: &str,
        key_id: i64,
        language_iso: &str,
    ) -> Result<SegmentsResponse> {
        self.base
            .get(
                &["projects", project_id, "keys", &key_id.to_string(), "segments", language_iso],
                &[&self.list_options],
            )
            .await
    }

    /// Retrieve one segment.
    pub async fn retrieve(
        &self,
        project_id: &str,
        key_id: i64,
        language_iso: &str,
        segment_number: i64,
    ) -> Result<SegmentResponse> {
        self.base
            .get(
                &[
                    "projects",
                    project_id,
                    "keys",
                    &key_id.to_string(),
                    "segments",
                    language_iso,
                    &segment_number.to_string(),
                ],
                &[],
            )
            .await
    }

    /// Update one segment.
    pub async fn update(
        &self,
        project_id: &str,
        key_id: i64,
        language_iso: &str,
        segment_number: i64,
        update: &UpdateSegment,
    ) -> Result<SegmentResponse> {
        self.base
            .put(
                &[
                    "projects",
                    project_id,
                    "keys",
                    &key_id.to_string(),
                    "segments",
                    language_iso,
                    &segment_number.to_string(),
                ],
                update,
            )
            .await
    }
}
