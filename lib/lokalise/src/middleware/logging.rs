//! Request/response logging middleware.
//!
//! Logs every attempt with `tracing`. In verbose mode the request headers
//! are included, with the API token masked.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, info, span, warn};

use super::API_TOKEN_HEADER;
use crate::{Error, Request, Response, Result};

/// Layer that adds request/response logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Log level for the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level, with headers and body sizes.
    Debug,
    /// Log at info level, summary only.
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// Pick the level from the client `debug` flag.
    #[must_use]
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::debug() } else { Self::new() }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Service that logs requests and responses.
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

fn masked_headers(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(API_TOKEN_HEADER) {
                (name.clone(), "***".to_string())
            } else {
                (name.clone(), value.clone())
            }
        })
        .collect()
}

impl<S> Service<Request<Bytes>> for Logging<S>
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

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let method = request.method();
        let url = request.url().to_string();
        let level = self.level;

        let span = span!(Level::INFO, "http_request", %method, %url);

        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let start = Instant::now();

                match level {
                    LogLevel::Debug => {
                        debug!(
                            headers = ?masked_headers(request.headers()),
                            body_len = request.body().map_or(0, Bytes::len),
                            "sending request"
                        );
                    }
                    LogLevel::Info => {
                        info!("sending request");
                    }
                }

                let result = inner.call(request).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) if response.is_success() => {
                        if level == LogLevel::Debug {
                            debug!(
                                status = response.status(),
                                elapsed_ms,
                                body_len = response.body().len(),
                                "request completed"
                            );
                        } else {
                            info!(status = response.status(), elapsed_ms, "request completed");
                        }
                    }
                    Ok(response) => {
                        warn!(
                            status = response.status(),
                            elapsed_ms,
                            "request failed with HTTP error"
                        );
                    }
                    Err(err) => {
                        warn!(error = %err, elapsed_ms, "request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn logging_layer_default() {
        let layer = LoggingLayer::new();
        check!(layer.level == LogLevel::Info);
    }

    #[test]
    fn logging_layer_from_flag() {
        check!(LoggingLayer::from_debug_flag(true).level == LogLevel::Debug);
        check!(LoggingLayer::from_debug_flag(false).level == LogLevel::Info);
    }

    #[test]
    fn token_is_masked() {
        let headers = HashMap::from([
            ("X-Api-Token".to_string(), "secret".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]);
        let masked = masked_headers(&headers);
        check!(masked["X-Api-Token"] == "***");
        check!(masked["Accept"] == "application/json");
    }
}
