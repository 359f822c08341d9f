//! Retry, authentication and cancellation behaviour of the transport.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use assert2::{check, let_assert};
use lokalise::{Api, CancellationToken, Error};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer, retry_count: i64) -> Api {
    Api::builder("secret")
        .base_url(format!("{}/api2/", server.uri()))
        .retry_count(retry_count)
        .retry_wait(Duration::from_millis(1))
        .build()
        .expect("valid config")
}

fn server_error() -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(json!({ "error": { "code": 500, "message": "boom" } }))
}

#[tokio::test]
async fn retries_server_errors_until_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(server_error())
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let teams = api(&server, 2).teams().list().await.expect("teams");

    check!(teams.teams.is_empty());
    let requests = server.received_requests().await.expect("recording enabled");
    check!(requests.len() == 3);
}

#[tokio::test]
async fn token_is_sent_on_every_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(server_error())
        .expect(3)
        .mount(&server)
        .await;

    let result = api(&server, 2).teams().list().await;
    let_assert!(Err(Error::Api { code: 500, .. }) = result);

    let requests = server.received_requests().await.expect("recording enabled");
    check!(requests.len() == 3);
    for request in &requests {
        let token = request.headers.get("X-Api-Token").map(|value| value.as_bytes());
        check!(token == Some(b"secret".as_slice()));
    }
}

#[tokio::test]
async fn gives_up_after_the_retry_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(server_error())
        .expect(4)
        .mount(&server)
        .await;

    let result = api(&server, 3).teams().list().await;

    let_assert!(Err(error) = result);
    check!(error.is_server_error());
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "error": { "code": 401, "message": "Invalid `X-Api-Token` header" }
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = api(&server, 3).teams().list().await;

    let_assert!(Err(error) = result);
    check!(error.is_client_error());
    check!(error.code() == Some(401));
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "1")
                .set_body_json(json!({ "error": { "code": 429, "message": "Too many requests" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = api(&server, 3).teams().list().await;

    let_assert!(Err(Error::Api { code: 429, .. }) = result);
}

#[tokio::test]
async fn zero_retries_means_a_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(server_error())
        .expect(1)
        .mount(&server)
        .await;

    let result = api(&server, 0).teams().list().await;

    let_assert!(Err(Error::Api { code: 500, .. }) = result);
}

#[tokio::test]
async fn cancelled_token_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = api(&server, 3).teams().with_cancellation(cancel).list().await;

    let_assert!(Err(error) = result);
    check!(error.is_cancelled());
}

#[tokio::test]
async fn cancellation_interrupts_the_retry_wait() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .respond_with(server_error())
        .expect(1)
        .mount(&server)
        .await;

    let api = Api::builder("secret")
        .base_url(format!("{}/api2/", server.uri()))
        .retry_count(5)
        .retry_wait(Duration::from_secs(30))
        .max_retry_wait(Duration::from_secs(30))
        .build()
        .expect("valid config");

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let result = api.teams().with_cancellation(cancel).list().await;

    let_assert!(Err(Error::Cancelled) = result);
    check!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn default_page_limit_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/teams"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
        .expect(1)
        .mount(&server)
        .await;

    api(&server, 0).teams().list().await.expect("teams");

    let requests = server.received_requests().await.expect("recording enabled");
    let_assert!([request] = requests.as_slice());
    check!(request.url.query() == Some("limit=100"));
}

#[test]
fn negative_retry_count_is_rejected() {
    let result = Api::builder("secret").retry_count(-1).build();

    let_assert!(Err(Error::InvalidConfig(message)) = result);
    check!(message.contains("retry count"));
}

/// Accepts one connection, sends the headers and then the body, each after `delay`.
async fn slow_server(delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buffer = [0_u8; 4096];
        let _ = socket.read(&mut buffer).await;

        tokio::time::sleep(delay).await;
        let body = r#"{"teams":[]}"#;
        let head = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n",
            body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.flush().await;

        tokio::time::sleep(delay).await;
        let _ = socket.write_all(body.as_bytes()).await;
        let _ = socket.flush().await;
    });

    format!("http://{address}/api2/")
}

#[tokio::test]
async fn timeout_covers_headers_and_body() {
    let base_url = slow_server(Duration::from_millis(250)).await;
    let api = Api::builder("secret")
        .base_url(base_url)
        .retry_count(0)
        .timeout(Duration::from_millis(300))
        .build()
        .expect("valid config");

    let started = Instant::now();
    let result = api.teams().list().await;

    let_assert!(Err(error) = result);
    check!(error.is_timeout());
    check!(started.elapsed() < Duration::from_millis(450));
}

#[tokio::test]
async fn transport_failures_are_retried() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("address");
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&attempts);
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(socket);
        }
    });

    let api = Api::builder("secret")
        .base_url(format!("http://{address}/api2/"))
        .retry_count(2)
        .retry_wait(Duration::from_millis(1))
        .build()
        .expect("valid config");

    let result = api.teams().list().await;

    let_assert!(Err(error) = result);
    check!(error.is_connection());
    check!(attempts.load(Ordering::SeqCst) == 3);
}

#[tokio::test]
async fn identical_list_calls_send_identical_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/projects/P/keys"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "project_id": "P", "keys": [] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let keys = api(&server, 0)
        .keys()
        .with_page_options(lokalise::PageOptions::new(50, 2))
        .with_list_options(lokalise::services::KeyListOptions {
            include_translations: true,
            filter_tags: vec!["web".to_string(), "ios".to_string()],
            ..lokalise::services::KeyListOptions::default()
        });
    keys.list("P").await.expect("first call");
    keys.list("P").await.expect("second call");

    let requests = server.received_requests().await.expect("recording enabled");
    let_assert!([first, second] = requests.as_slice());
    check!(first.method == second.method);
    check!(first.url == second.url);
    let query = first.url.query();
    check!(query == Some("limit=50&page=2&include_translations=1&filter_tags=web%2Cios"));
}
