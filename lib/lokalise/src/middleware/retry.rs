//! Retry policy for API calls.
//!
//! A call is attempted at most `1 + retry_count` times. By default only
//! transport failures and 5xx responses are retried; 4xx responses,
//! including 429, go straight back to the caller.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Sleep;
use tower::retry::Policy;
use tracing::debug;

use crate::config::ClientConfig;
use crate::{Error, Request, Response};

/// Decides whether an attempt outcome is retried.
///
/// Exactly one of the arguments is `Some`: the response when the server
/// answered, the error when it did not.
pub type RetryCondition =
    Arc<dyn Fn(Option<&Response<Bytes>>, Option<&Error>) -> bool + Send + Sync>;

/// Retry on transport failures and 5xx responses.
///
/// A missing response is retried unless the error says the call cannot
/// succeed on a new attempt.
#[must_use]
pub fn default_retry_condition(
    response: Option<&Response<Bytes>>,
    error: Option<&Error>,
) -> bool {
    match (response, error) {
        (Some(response), _) => response.is_server_error(),
        (None, Some(error)) => error.is_transient(),
        (None, None) => true,
    }
}

/// Tower retry policy with a fixed wait between attempts.
///
/// A `Retry-After` header on the failed response can stretch the wait, never
/// beyond `max_wait`.
#[derive(Clone)]
pub struct RetryPolicy {
    remaining: u32,
    wait: Duration,
    max_wait: Duration,
    condition: RetryCondition,
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("remaining", &self.remaining)
            .field("wait", &self.wait)
            .field("max_wait", &self.max_wait)
            .finish_non_exhaustive()
    }
}

impl RetryPolicy {
    /// Create a policy allowing `max_retries` retries after the first attempt.
    #[must_use]
    pub fn new(max_retries: u32, wait: Duration) -> Self {
        Self {
            remaining: max_retries,
            wait,
            max_wait: wait,
            condition: Arc::new(default_retry_condition),
        }
    }

    /// Build the policy from the client configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.retry_count, config.retry_wait).with_max_wait(config.max_retry_wait)
    }

    /// Cap for server-requested waits.
    #[must_use]
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait.max(self.wait);
        self
    }

    /// Replace the retry condition.
    #[must_use]
    pub fn with_condition(mut self, condition: RetryCondition) -> Self {
        self.condition = condition;
        self
    }

    fn should_retry(&self, result: &Result<Response<Bytes>, Error>) -> bool {
        match result {
            Ok(response) => (self.condition)(Some(response), None),
            Err(Error::Cancelled) => false,
            Err(error) => (self.condition)(None, Some(error)),
        }
    }

    fn backoff(&self, result: &Result<Response<Bytes>, Error>) -> Duration {
        let requested = result
            .as_ref()
            .ok()
            .and_then(|response| response.header("retry-after"))
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        match requested {
            Some(requested) if requested > self.wait => requested.min(self.max_wait),
            _ => self.wait,
        }
    }
}

impl Policy<Request<Bytes>, Response<Bytes>, Error> for RetryPolicy {
    type Future = Sleep;

    fn retry(
        &mut self,
        req: &mut Request<Bytes>,
        result: &mut Result<Response<Bytes>, Error>,
    ) -> Option<Self::Future> {
        if self.remaining == 0 || !self.should_retry(result) {
            return None;
        }

        self.remaining -= 1;
        let wait = self.backoff(result);
        match result {
            Ok(response) => debug!(
                url = %req.url(),
                status = response.status(),
                remaining = self.remaining,
                wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                "retrying request"
            ),
            Err(error) => debug!(
                url = %req.url(),
                error = %error,
                remaining = self.remaining,
                wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                "retrying request"
            ),
        }
        Some(tokio::time::sleep(wait))
    }

    fn clone_request(&mut self, req: &Request<Bytes>) -> Option<Request<Bytes>> {
        Some(req.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::check;

    use super::*;

    fn response(status: u16) -> Response<Bytes> {
        Response::new(status, HashMap::default(), Bytes::new())
    }

    fn response_with_retry_after(status: u16, seconds: &str) -> Response<Bytes> {
        let headers = HashMap::from([("Retry-After".to_string(), seconds.to_string())]);
        Response::new(status, headers, Bytes::new())
    }

    #[test]
    fn retries_5xx_responses() {
        check!(default_retry_condition(Some(&response(500)), None));
        check!(default_retry_condition(Some(&response(503)), None));
        check!(default_retry_condition(Some(&response(599)), None));
    }

    #[test]
    fn never_retries_4xx_responses() {
        check!(!default_retry_condition(Some(&response(400)), None));
        check!(!default_retry_condition(Some(&response(404)), None));
        check!(!default_retry_condition(Some(&response(429)), None));
        check!(!default_retry_condition(Some(&response(499)), None));
    }

    #[test]
    fn retries_when_nothing_came_back() {
        check!(default_retry_condition(None, None));
    }

    #[test]
    fn does_not_retry_success() {
        check!(!default_retry_condition(Some(&response(200)), None));
    }

    #[test]
    fn retries_transport_errors() {
        check!(default_retry_condition(None, Some(&Error::connection("refused"))));
        check!(default_retry_condition(None, Some(&Error::Timeout)));
        check!(!default_retry_condition(None, Some(&Error::invalid_request("bad"))));
    }

    #[test]
    fn cancelled_is_never_retried() {
        let policy = RetryPolicy::new(3, Duration::ZERO).with_condition(Arc::new(|_, _| true));
        check!(!policy.should_retry(&Err(Error::Cancelled)));
    }

    #[test]
    fn custom_condition_is_used() {
        let policy = RetryPolicy::new(3, Duration::ZERO).with_condition(Arc::new(|response, _| {
            response.is_some_and(|response| response.status() == 429)
        }));
        check!(policy.should_retry(&Ok(response(429))));
        check!(!policy.should_retry(&Ok(response(500))));
    }

    #[test]
    fn retry_after_is_capped() {
        let policy =
            RetryPolicy::new(3, Duration::from_millis(100)).with_max_wait(Duration::from_secs(2));

        check!(policy.backoff(&Ok(response(503))) == Duration::from_millis(100));
        check!(policy.backoff(&Ok(response_with_retry_after(503, "1"))) == Duration::from_secs(1));
        check!(policy.backoff(&Ok(response_with_retry_after(503, "60"))) == Duration::from_secs(2));
        let unparsable = response_with_retry_after(503, "soon");
        check!(policy.backoff(&Ok(unparsable)) == Duration::from_millis(100));
    }

    #[tokio::test]
    async fn budget_is_consumed() {
        let mut policy = RetryPolicy::new(2, Duration::ZERO);
        let url = url::Url::parse("https://api.lokalise.co/api2/projects").expect("url");
        let mut request = Request::builder(crate::Method::Get, url).build();

        let mut result = Ok(response(500));
        check!(policy.retry(&mut request, &mut result).is_some());
        check!(policy.retry(&mut request, &mut result).is_some());
        check!(policy.retry(&mut request, &mut result).is_none());
    }
}
