//! Key comments.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A comment attached to a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub comment_id: i64,
    pub key_id: i64,
    pub comment: String,
    pub added_by: i64,
    pub added_by_email: String,
    pub added_at: String,
    pub added_at_timestamp: i64,
}

/// Page of comments, also returned by [`CommentService::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub comments: Vec<Comment>,
}

impl_paginated!(CommentsResponse);

/// Single comment reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub comment: Comment,
}

/// Reply of [`CommentService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub comment_deleted: bool,
}

/// Comment creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub comment: String,
}

impl NewComment {
    /// Comment with the given text.
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}

#[derive(Serialize)]
struct NewComments<'a> {
    comments: &'a [NewComment],
}

/// Comments service.
#[derive(Debug, Clone)]
pub struct CommentService {
    base: ServiceBase,
}

impl_service_base!(CommentService);

impl CommentService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List every comment of a project.
    pub async fn list_project(&self, project_id: &str) -> Result<CommentsResponse> {
        self.base.list(&["projects", project_id, "comments"], &[]).await
    }

    /// List the comments of one key.
    pub async fn list_key(&self, project_id: &str, key_id: i64) -> Result<CommentsResponse> {
        self.base
            .list(
                &["projects", project_id, "keys", &key_id.to_string(), "comments"],
                &[],
            )
            .await
    }

    /// Add comments to a key.
    pub async fn create(
        &self,
        project_id: &str,
        key_id: i64,
        comments: &[NewComment],
    ) -> Result<CommentsResponse> {
        self.base
            .post(
                &["projects", project_id, "keys", &key_id.to_string(), "comments"],
                &NewComments { comments },
            )
            .await
    }

    /// Retrieve a comment.
    pub async fn retrieve(
        &self,
        project_id: &str,
        key_id: i64,
        comment_id: i64,
    ) -> Result<CommentResponse> {
        self.base
            .get(
                &[
                    "projects",
                    project_id,
                    "keys",
                    &key_id.to_string(),
                    "comments",
                    &comment_id.to_string(),
                ],
                &[],
            )
            .await
    }

    /// Delete a comment.
    pub async fn delete(
        &self,
        project_id: &str,
        key_id: i64,
        comment_id: i64,
    ) -> Result<CommentDeleted> {
        self.base
            .delete(&[
                "projects",
                project_id,
                "keys",
                &key_id.to_string(),
                "comments",
                &comment_id.to_string(),
            ])
            .await
    }
}
