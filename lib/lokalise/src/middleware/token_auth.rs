//! API token authentication middleware.
//!
//! Every outgoing request gets an `X-Api-Token` header.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

/// Header carrying the API token.
pub const API_TOKEN_HEADER: &str = "X-Api-Token";

/// Layer that authenticates requests with an API token.
#[derive(Clone)]
pub struct TokenAuthLayer {
    token: Arc<str>,
}

impl std::fmt::Debug for TokenAuthLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthLayer")
            .field("token", &"***")
            .finish()
    }
}

impl TokenAuthLayer {
    /// Create a new token auth layer with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }
}

impl<S> Layer<S> for TokenAuthLayer {
    type Service = TokenAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TokenAuth {
            inner,
            token: Arc::clone(&self.token),
        }
    }
}

/// Service that sets the API token header on requests.
#[derive(Clone)]
pub struct TokenAuth<S> {
    inner: S,
    token: Arc<str>,
}

impl<S> Service<Request<Bytes>> for TokenAuth<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Bytes>) -> Self::Future {
        request
            .headers_mut()
            .insert(API_TOKEN_HEADER.to_string(), self.token.to_string());

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert2::check;
    use tower::ServiceExt;

    use super::*;
    use crate::Method;

    #[derive(Clone, Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl Service<Request<Bytes>> for Recorder {
        type Response = Response<Bytes>;
        type Error = Error;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, request: Request<Bytes>) -> Self::Future {
            self.seen
                .lock()
                .expect("lock")
                .push(request.header(API_TOKEN_HEADER).map(str::to_string));
            Box::pin(async { Ok(Response::new(200, HashMap::new(), Bytes::new())) })
        }
    }

    #[tokio::test]
    async fn sets_token_header() {
        let recorder = Recorder::default();
        let service = TokenAuthLayer::new("secret").layer(recorder.clone());
        let url = url::Url::parse("https://api.lokalise.co/api2/projects").expect("url");

        let response = service
            .oneshot(Request::builder(Method::Get, url).build())
            .await
            .expect("response");

        check!(response.status() == 200);
        check!(*recorder.seen.lock().expect("lock") == vec![Some("secret".to_string())]);
    }

    #[test]
    fn debug_hides_token() {
        let layer = TokenAuthLayer::new("secret");
        check!(!format!("{layer:?}").contains("secret"));
    }
}
