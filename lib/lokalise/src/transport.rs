//! HTTP transport using hyper-util, wrapped in the tower middleware stack.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tokio_util::sync::CancellationToken;
use tower::Layer;
use tower::util::BoxCloneService;
use tower_service::Service;
use tracing::debug;

use crate::config::ClientConfig;
use crate::connector::https_connector;
use crate::middleware::{LoggingLayer, RetryCondition, RetryLayer, RetryPolicy, TokenAuthLayer};
use crate::{Error, HttpClient, Request, Response, Result};

/// Type-erased service for middleware composition.
pub type BoxedService = BoxCloneService<Request<Bytes>, Response<Bytes>, Error>;

/// Future type for Tower Service implementation.
pub type ServiceFuture = Pin<Box<dyn Future<Output = Result<Response<Bytes>>> + Send + 'static>>;

type LayerFn = Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>;

/// Thread-safe wrapper for `BoxedService`.
///
/// The mutex only guards the clone; calls run on the clone without the lock.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request<Bytes>) -> ServiceFuture {
        let mut service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { service.call(request).await })
    }
}

/// Raw HTTP client using hyper-util: one attempt, no middleware.
#[derive(Clone)]
struct RawHyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    timeout: std::time::Duration,
}

impl RawHyperClient {
    fn new(config: &ClientConfig) -> Self {
        let connector = https_connector(config.connect_timeout);

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self {
            inner,
            timeout: config.timeout,
        }
    }

    fn build_hyper_request(request: Request<Bytes>) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let hyper_request = Self::build_hyper_request(request)?;

        // One deadline for headers and body together.
        tokio::time::timeout(self.timeout, async {
            let response = self
                .inner
                .request(hyper_request)
                .await
                .map_err(Self::map_hyper_error)?;

            let status = response.status().as_u16();
            let response_headers = Self::extract_headers(response.headers());

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();

            Ok::<_, Error>(Response::new(status, response_headers, body))
        })
        .await
        .map_err(|_| Error::Timeout)?
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        let lower = msg.to_lowercase();
        if lower.contains("ssl") || lower.contains("tls") || lower.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Service<Request<Bytes>> for RawHyperClient {
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let client = self.clone();
        Box::pin(async move { client.execute(request).await })
    }
}

/// Authenticated HTTP transport with retry and logging.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    service: SyncService,
    config: ClientConfig,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport with the default middleware stack.
    #[must_use]
    pub fn new(token: impl Into<String>, config: ClientConfig) -> Self {
        Self::builder(token, config).build()
    }

    /// Create a transport builder.
    #[must_use]
    pub fn builder(token: impl Into<String>, config: ClientConfig) -> HttpTransportBuilder {
        HttpTransportBuilder {
            token: token.into(),
            config,
            retry_condition: None,
            layers: Vec::new(),
        }
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request unless `cancel` fires first.
    ///
    /// An already cancelled token fails before any attempt is made. A token
    /// cancelled mid-call abandons the in-flight attempt or retry wait.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] on cancellation, or the transport error of
    /// the last attempt.
    pub async fn execute_cancellable(
        &self,
        request: Request<Bytes>,
        cancel: &CancellationToken,
    ) -> Result<Response<Bytes>> {
        execute_cancellable(self, request, cancel).await
    }
}

/// Execute a request on any [`HttpClient`] unless `cancel` fires first.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] on cancellation, or the client error.
pub async fn execute_cancellable<C>(
    client: &C,
    request: Request<Bytes>,
    cancel: &CancellationToken,
) -> Result<Response<Bytes>>
where
    C: HttpClient,
{
    if cancel.is_cancelled() {
        debug!(url = %request.url(), "request cancelled before sending");
        return Err(Error::Cancelled);
    }

    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!("request cancelled");
            Err(Error::Cancelled)
        }
        result = client.execute(request) => result,
    }
}

impl HttpClient for HttpTransport {
    async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        self.service.call(request).await
    }
}

impl Service<Request<Bytes>> for HttpTransport {
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        self.service.call(request)
    }
}

/// Builder for [`HttpTransport`].
pub struct HttpTransportBuilder {
    token: String,
    config: ClientConfig,
    retry_condition: Option<RetryCondition>,
    layers: Vec<LayerFn>,
}

impl std::fmt::Debug for HttpTransportBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransportBuilder")
            .field("config", &self.config)
            .field("custom_retry_condition", &self.retry_condition.is_some())
            .field("layers_count", &self.layers.len())
            .finish_non_exhaustive()
    }
}

impl HttpTransportBuilder {
    /// Replace the default retry condition.
    #[must_use]
    pub fn retry_condition(mut self, condition: RetryCondition) -> Self {
        self.retry_condition = Some(condition);
        self
    }

    /// Add a Tower layer around the whole stack.
    ///
    /// Layers are applied in order: first added = outermost.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request<Bytes>>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Build the transport.
    #[must_use]
    pub fn build(self) -> HttpTransport {
        let config = self.config;
        let raw = RawHyperClient::new(&config);

        let mut service: BoxedService = BoxCloneService::new(raw);
        service = BoxCloneService::new(LoggingLayer::from_debug_flag(config.debug).layer(service));

        let mut policy = RetryPolicy::from_config(&config);
        if let Some(condition) = self.retry_condition {
            policy = policy.with_condition(condition);
        }
        service = BoxCloneService::new(RetryLayer::new(policy).layer(service));
        service = BoxCloneService::new(TokenAuthLayer::new(self.token).layer(service));

        for layer_fn in self.layers.into_iter().rev() {
            service = layer_fn(service);
        }

        HttpTransport {
            service: SyncService::new(service),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::Method;

    fn transport() -> HttpTransport {
        HttpTransport::new("token", ClientConfig::default())
    }

    #[test]
    fn transport_is_debug_without_token() {
        let debug = format!("{:?}", transport());
        check!(debug.contains("HttpTransport"));
        check!(!debug.contains("\"token\""));
    }

    #[tokio::test]
    async fn cancelled_token_fails_before_sending() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let url = url::Url::parse("http://127.0.0.1:9/projects").expect("url");

        let result = transport()
            .execute_cancellable(Request::builder(Method::Get, url).build(), &cancel)
            .await;

        let_assert!(Err(Error::Cancelled) = result);
    }
}
