//! End-to-end tests of the resource services against a wiremock server.

use assert2::{check, let_assert};
use lokalise::services::{KeyListOptions, NewComment};
use lokalise::{Api, CursorPageOptions, Error, PageOptions, Paged};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> Api {
    Api::builder("secret")
        .base_url(format!("{}/api2/", server.uri()))
        .retry_count(0)
        .build()
        .expect("valid config")
}

#[tokio::test]
async fn list_projects_without_pagination_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/projects"))
        .and(header("X-Api-Token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [
                { "project_id": "123.abc", "name": "Web", "team_id": 7 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let projects = api(&server).projects().list().await.expect("projects");

    check!(projects.paged == Paged::default());
    check!(projects.paged.total_count.is_none());
    check!(projects.projects.len() == 1);
    check!(projects.projects[0].project_id == "123.abc");
    check!(projects.projects[0].name == "Web");
}

#[tokio::test]
async fn list_keys_reads_offset_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/projects/P/keys"))
        .and(query_param("limit", "100"))
        .and(query_param("page", "1"))
        .and(query_param("include_translations", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Pagination-Total-Count", "1000")
                .insert_header("X-Pagination-Page-Count", "10")
                .insert_header("X-Pagination-Limit", "100")
                .insert_header("X-Pagination-Page", "1")
                .set_body_json(json!({
                    "project_id": "P",
                    "keys": [
                        { "key_id": 1, "key_name": "greeting" },
                        {
                            "key_id": 2,
                            "key_name": {
                                "ios": "hi",
                                "android": "hi_android",
                                "web": "",
                                "other": ""
                            }
                        }
                    ]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let keys = api(&server)
        .keys()
        .with_page_options(PageOptions::new(0, 1))
        .with_list_options(KeyListOptions {
            include_translations: true,
            ..KeyListOptions::default()
        })
        .list("P")
        .await
        .expect("keys");

    check!(
        keys.paged
            == Paged {
                total_count: Some(1000),
                page_count: Some(10),
                limit: Some(100),
                page: Some(1),
                next_cursor: None,
            }
    );
    check!(keys.project_id == "P");
    check!(keys.keys.len() == 2);
}

#[tokio::test]
async fn list_keys_in_cursor_mode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/projects/P/keys"))
        .and(query_param("pagination", "cursor"))
        .and(query_param("cursor", "eyIxIjo1MjcyNjU2MTV9"))
        .and(query_param("limit", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Pagination-Limit", "100")
                .insert_header("X-Pagination-Next-Cursor", "eyIxIjo0NDU5NjA2MX0=")
                .set_body_json(json!({ "project_id": "P", "keys": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let keys = api(&server)
        .keys()
        .with_cursor_options(CursorPageOptions::new(0, "eyIxIjo1MjcyNjU2MTV9"))
        .list("P")
        .await
        .expect("keys");

    check!(keys.paged.next_cursor.as_deref() == Some("eyIxIjo0NDU5NjA2MX0="));
    check!(keys.paged.has_next_cursor());
    check!(keys.paged.total_count.is_none());
    check!(keys.keys.is_empty());
}

#[tokio::test]
async fn create_comments_in_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api2/projects/P/keys/12345/comments"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "comments": [{ "comment": "hi" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": "P",
            "comments": [
                {
                    "comment_id": 44444,
                    "key_id": 12345,
                    "comment": "hi",
                    "added_by": 420,
                    "added_by_email": "translator@example.com",
                    "added_at": "2019-12-27 12:00:00 (Etc/UTC)",
                    "added_at_timestamp": 1_577_448_000
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = api(&server)
        .comments()
        .create("P", 12345, &[NewComment::new("hi")])
        .await
        .expect("comments");

    check!(created.comments.len() == 1);
    check!(created.comments[0].comment_id == 44444);
    check!(created.comments[0].key_id == 12345);
}

#[tokio::test]
async fn not_found_envelope_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/projects/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": { "code": 404, "message": "not found" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = api(&server).projects().retrieve("missing").await;

    let_assert!(Err(error) = result);
    check!(error.to_string() == "API request error 404 not found");
    check!(error.is_not_found());
    let_assert!(Error::Api { code: 404, .. } = error);
}

#[tokio::test]
async fn bulk_delete_sends_a_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api2/projects/P/keys"))
        .and(body_json(json!({ "keys": [1, 2] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": "P",
            "keys_removed": true,
            "keys_locked": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = api(&server)
        .keys()
        .bulk_delete("P", &[1, 2])
        .await
        .expect("deleted");

    check!(deleted.keys_removed);
    check!(deleted.keys_locked == 0);
}

#[tokio::test]
async fn identifiers_are_escaped_in_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/projects/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": "a/b",
            "name": "Escaped"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let project = api(&server).projects().retrieve("a/b").await.expect("project");

    check!(project.name == "Escaped");
}

#[tokio::test]
async fn truncate_project() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api2/projects/P/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": "P",
            "keys_deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let truncated = api(&server).projects().truncate("P").await.expect("truncated");

    check!(truncated.project_id == "P");
    check!(truncated.keys_deleted);
}

#[tokio::test]
async fn regenerate_webhook_secret_uses_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api2/projects/P/webhooks/W1/secret/regenerate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": "P",
            "secret": "2ce8e8b2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let secret = api(&server)
        .webhooks()
        .regenerate_secret("P", "W1")
        .await
        .expect("secret");

    check!(secret.secret == "2ce8e8b2");
}

#[tokio::test]
async fn null_numbers_default_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/projects/P/translations/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": "P",
            "translation": {
                "translation_id": 7,
                "key_id": 1,
                "language_iso": "en",
                "translation": "Hello",
                "reviewed_by": null,
                "task_id": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = api(&server)
        .translations()
        .retrieve("P", 7)
        .await
        .expect("translation");

    check!(reply.translation.task_id == 0);
    check!(reply.translation.reviewed_by == 0);
}
