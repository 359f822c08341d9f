//! HTTP client trait.
//!
//! [`HttpClient`] is the seam between request shaping and the network.
//! The `lokalise` crate implements it with a hyper based transport; tests
//! and alternative runtimes can plug their own implementation.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations execute one logical call: authentication, retries and
/// timeouts happen below this trait.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// Any status code is returned as `Ok`; error envelopes are decoded by
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}
