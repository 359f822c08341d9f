//! Translation files: import and export.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::queued_processes::QueuedProcess;
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Query, Result};

/// A file known to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub file_id: i64,
    pub filename: String,
    pub key_count: i64,
}

/// Page of files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilesResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub files: Vec<File>,
}

impl_paginated!(FilesResponse);

/// Reply of [`FileService::upload`]: the import runs as a queued process.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileUploadResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub process: QueuedProcess,
}

/// Reply of [`FileService::download`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileDownloadResponse {
    pub project_id: String,
    pub branch: Option<String>,
    /// Temporary link to the exported archive.
    pub bundle_url: String,
}

/// Reply of [`FileService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub file_deleted: bool,
}

/// File import payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileUpload {
    /// Base64 file content.
    pub data: String,
    pub filename: String,
    pub lang_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_placeholders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_icu_plurals: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_inserted_keys: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_updated_keys: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_skipped_keys: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_modified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slashn_to_linebreak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_to_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinguish_by_file: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_tm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_automations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_from_contributors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_mode: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_translation_status_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_detect_lang_iso: Option<bool>,
    /// Left out unless set; uploads are always queued by the current API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<bool>,
}

impl FileUpload {
    /// Upload of raw file content, base64 encoded here.
    pub fn from_bytes(
        filename: impl Into<String>,
        lang_iso: impl Into<String>,
        content: &[u8],
    ) -> Self {
        Self {
            data: STANDARD.encode(content),
            filename: filename.into(),
            lang_iso: lang_iso.into(),
            ..Self::default()
        }
    }
}

/// File export payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileDownload {
    /// Export format such as `json`, `xliff` or `strings`.
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filenames: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bundle_structure: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub directory_prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_platforms: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_langs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_data: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_filenames: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_newline_eof: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub export_empty_as: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub export_sort: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_breaks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_null_as: Option<String>,
}

/// Filters for [`FileService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct FileListOptions {
    pub filter_filename: String,
}

/// Files service.
#[derive(Debug, Clone)]
pub struct FileService {
    base: ServiceBase,
    list_options: FileListOptions,
}

impl_service_base!(FileService);

impl FileService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: FileListOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: FileListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// List the files of a project.
    pub async fn list(&self, project_id: &str) -> Result<FilesResponse> {
        self.base
            .list(&["projects", project_id, "files"], &[&self.list_options])
            .await
    }

    /// Queue a file import; poll the returned process for completion.
    pub async fn upload(
        &self,
        project_id: &str,
        upload: &FileUpload,
    ) -> Result<FileUploadResponse> {
        self.base
            .post(&["projects", project_id, "files", "upload"], upload)
            .await
    }

    /// Export translations as an archive.
    pub async fn download(
        &self,
        project_id: &str,
        download: &FileDownload,
    ) -> Result<FileDownloadResponse> {
        self.base
            .post(&["projects", project_id, "files", "download"], download)
            .await
    }

    /// Delete a file and its keys.
    pub async fn delete(&self, project_id: &str, file_id: i64) -> Result<FileDeleted> {
        self.base
            .delete(&["projects", project_id, "files", &file_id.to_string()])
            .await
    }
}
