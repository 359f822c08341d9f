//! Screenshots.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::model::ItemError;
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Query, Result};

/// A screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screenshot {
    pub screenshot_id: i64,
    pub key_ids: Vec<i64>,
    pub keys: Vec<ScreenshotKey>,
    pub url: String,
    pub title: String,
    pub description: String,
    pub screenshot_tags: Vec<String>,
    pub width: i64,
    pub height: i64,
    pub created_at: String,
    pub created_at_timestamp: i64,
}

/// Key marked on a screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotKey {
    pub key_id: i64,
    pub coordinates: Coordinates,
}

/// Area of a key on a screenshot, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

/// Page of screenshots, also returned by [`ScreenshotService::create`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScreenshotsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub screenshots: Vec<Screenshot>,
    pub errors: Vec<ItemError>,
}

impl_paginated!(ScreenshotsResponse);

/// Single screenshot reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScreenshotResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub screenshot: Screenshot,
}

/// Reply of [`ScreenshotService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScreenshotDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub screenshot_deleted: bool,
}

/// Screenshot upload payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewScreenshot {
    /// Image as a base64 data URI.
    pub data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Let the server detect keys by text recognition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl NewScreenshot {
    /// Screenshot from raw image bytes of the given MIME type.
    #[must_use]
    pub fn from_image(mime_type: &str, image: &[u8]) -> Self {
        Self {
            data: format!("data:{mime_type};base64,{}", STANDARD.encode(image)),
            ..Self::default()
        }
    }
}

/// Screenshot update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateScreenshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Filters for [`ScreenshotService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct ScreenshotListOptions {
    pub filter_key_ids: Vec<i64>,
    pub filter_screenshot_ids: Vec<i64>,
}

#[derive(Serialize)]
struct NewScreenshots<'a> {
    screenshots: &'a [NewScreenshot],
}

/// Screenshots service.
#[derive(Debug, Clone)]
pub struct ScreenshotService {
    base: ServiceBase,
    list_options: ScreenshotListOptions,
}

impl_service_base!(ScreenshotService);

impl ScreenshotService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: ScreenshotListOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: ScreenshotListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// List the screenshots of a project.
    pub async fn list(&self, project_id: &str) -> Result<ScreenshotsResponse> {
        self.base
            .list(&["projects", project_id, "screenshots"], &[&self.list_options])
            .await
    }

    /// Upload screenshots.
    pub async fn create(
        &self,
        project_id: &str,
        screenshots: &[NewScreenshot],
    ) -> Result<ScreenshotsResponse> {
        self.base
            .post(
                &["projects", project_id, "screenshots"],
                &NewScreenshots { screenshots },
            )
            .await
    }

    /// Retrieve a screenshot.
    pub async fn retrieve(
        &self,
        project_id: &str,
        screenshot_id: i64,
    ) -> Result<ScreenshotResponse> {
        self.base
            .get(
                &["projects", project_id, "screenshots", &screenshot_id.to_string()],
                &[],
            )
            .await
    }

    /// Update a screenshot.
    pub async fn update(
        &self,
        project_id: &str,
        screenshot_id: i64,
        screenshot: &UpdateScreenshot,
    ) -> Result<ScreenshotResponse> {
        self.base
            .put(
                &["projects", project_id, "screenshots", &screenshot_id.to_string()],
                screenshot,
            )
            .await
    }

    /// Delete a screenshot.
    pub async fn delete(&self, project_id: &str, screenshot_id: i64) -> Result<ScreenshotDeleted> {
        self.base
            .delete(&["projects", project_id, "screenshots", &screenshot_id.to_string()])
            .await
    }
}
