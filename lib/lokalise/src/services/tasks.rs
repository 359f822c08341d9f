//! Translation and review tasks.
//!
//! Statuses (`created`, `queued`, `in progress`, `completed`) are kept as
//! the strings the server sends.

use serde::{Deserialize, Serialize};

use crate::model::null_as_default;
use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Query, Result};

/// A task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub task_id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub progress: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub due_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub due_date_timestamp: i64,
    pub keys_count: i64,
    pub words_count: i64,
    pub created_at: String,
    pub created_at_timestamp: i64,
    pub created_by: i64,
    pub created_by_email: String,
    pub can_be_parent: bool,
    /// `translation` or `review`.
    pub task_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_task_id: i64,
    pub closing_tags: Vec<String>,
    pub languages: Vec<TaskLanguage>,
    pub source_language_iso: String,
    pub auto_close_languages: bool,
    pub auto_close_task: bool,
    pub auto_close_items: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_at_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_by: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_by_email: String,
    pub do_lock_translations: bool,
    pub custom_translation_status_ids: Vec<i64>,
}

/// Per-language part of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskLanguage {
    pub language_iso: String,
    pub users: Vec<TaskUser>,
    pub groups: Vec<TaskGroup>,
    pub keys: Vec<i64>,
    pub status: String,
    pub progress: i64,
    pub keys_count: i64,
    pub words_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_at_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_by: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_by_email: String,
}

/// Assignee of a task language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskUser {
    pub user_id: i64,
    pub email: String,
    pub fullname: String,
}

/// Group assigned to a task language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskGroup {
    pub id: i64,
    pub name: String,
}

/// Page of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TasksResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub project_id: String,
    pub branch: Option<String>,
    pub tasks: Vec<Task>,
}

impl_paginated!(TasksResponse);

/// Single task reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskResponse {
    pub project_id: String,
    pub branch: Option<String>,
    pub task: Task,
}

/// Reply of [`TaskService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskDeleted {
    pub project_id: String,
    pub branch: Option<String>,
    pub task_deleted: bool,
}

/// Assignment of one language in a new or updated task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskLanguageAssignment {
    pub language_iso: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<i64>,
    /// Close this language of the task, update only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_language: Option<bool>,
}

/// Task creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub due_date: String,
    pub keys: Vec<i64>,
    pub languages: Vec<TaskLanguageAssignment>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_language_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_languages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_task: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_items: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub task_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub closing_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_lock_translations: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_translation_status_ids: Vec<i64>,
}

/// Task update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<TaskLanguageAssignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_languages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_task: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_task: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_lock_translations: Option<bool>,
}

/// Filters for [`TaskService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct TaskListOptions {
    pub filter_title: String,
    pub filter_statuses: Vec<String>,
}

/// Tasks service.
#[derive(Debug, Clone)]
pub struct TaskService {
    base: ServiceBase,
    list_options: TaskListOptions,
}

impl_service_base!(TaskService);

impl TaskService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self {
            base,
            list_options: TaskListOptions::default(),
        }
    }

    /// Filters applied by [`Self::list`].
    #[must_use]
    pub fn with_list_options(mut self, options: TaskListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// List the tasks of a project.
    pub async fn list(&self, project_id: &str) -> Result<TasksResponse> {
        self.base
            .list(&["projects", project_id, "tasks"], &[&self.list_options])
            .await
    }

    /// Create a task.
    pub async fn create(&self, project_id: &str, task: &NewTask) -> Result<TaskResponse> {
        self.base.post(&["projects", project_id, "tasks"], task).await
    }

    /// Retrieve a task.
    pub async fn retrieve(&self, project_id: &str, task_id: i64) -> Result<TaskResponse> {
        self.base
            .get(&["projects", project_id, "tasks", &task_id.to_string()], &[])
            .await
    }

    /// Update a task.
    pub async fn update(
        &self,
        project_id: &str,
        task_id: i64,
        task: &UpdateTask,
    ) -> Result<TaskResponse> {
        self.base
            .put(&["projects", project_id, "tasks", &task_id.to_string()], task)
            .await
    }

    /// Delete a task.
    pub async fn delete(&self, project_id: &str, task_id: i64) -> Result<TaskDeleted> {
        self.base
            .delete(&["projects", project_id, "tasks", &task_id.to_string()])
            .await
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn decodes_open_task() {
        let task: Task = serde_json::from_str(
            r#"{"task_id":55,"title":"Voicemail","status":"in progress","parent_task_id":null,
                "completed_at":null,"completed_at_timestamp":null,"completed_by":null,
                "languages":[{"language_iso":"fi",
                    "users":[{"user_id":420,"email":"jdoe@mycompany.com","fullname":"John Doe"}],
                    "keys":[11212,11241]}]}"#,
        )
        .expect("decode");

        check!(task.status == "in progress");
        check!(task.parent_task_id == 0);
        check!(task.completed_at.is_empty());
        check!(task.languages[0].users[0].user_id == 420);
    }
}
