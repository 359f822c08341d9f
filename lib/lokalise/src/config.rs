//! Client configuration types.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.lokalise.co/api2/";

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRY_COUNT: u32 = 3;

/// Default page size for list calls.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every resource path is joined onto.
    pub base_url: Url,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Connection timeout duration.
    pub connect_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
    /// Retries after the first attempt on transport failures and 5xx responses.
    pub retry_count: u32,
    /// Wait between attempts.
    pub retry_wait: Duration,
    /// Upper bound for the wait when the server asks for a longer backoff.
    pub max_retry_wait: Duration,
    /// Verbose request logging.
    pub debug: bool,
    /// Page size used when a service does not set one.
    pub page_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            retry_count: DEFAULT_RETRY_COUNT,
            retry_wait: Duration::from_millis(100),
            max_retry_wait: Duration::from_secs(2),
            debug: false,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
///
/// Values are checked by [`ClientConfigBuilder::build`], so a bad setting
/// fails when the client is constructed rather than on the first call.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
    retry_count: Option<i64>,
    retry_wait: Option<Duration>,
    max_retry_wait: Option<Duration>,
    debug: Option<bool>,
    page_limit: Option<u32>,
}

impl ClientConfigBuilder {
    /// Override the API base URL (useful against a mock server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-attempt request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Set the number of retries; must not be negative.
    #[must_use]
    pub const fn retry_count(mut self, count: i64) -> Self {
        self.retry_count = Some(count);
        self
    }

    /// Set the wait between attempts.
    #[must_use]
    pub const fn retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = Some(wait);
        self
    }

    /// Set the maximum wait between attempts.
    #[must_use]
    pub const fn max_retry_wait(mut self, wait: Duration) -> Self {
        self.max_retry_wait = Some(wait);
        self
    }

    /// Enable verbose request logging.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Set the default page size; must be positive.
    #[must_use]
    pub const fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a negative retry count, a zero page
    /// limit, a zero timeout or a base URL that cannot carry resource paths.
    pub fn build(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();

        let base_url = match self.base_url {
            Some(raw) => parse_base_url(&raw)?,
            None => defaults.base_url,
        };

        let retry_count = match self.retry_count {
            Some(count) => u32::try_from(count).map_err(|_| {
                Error::invalid_config(format!(
                    "retry count must be between 0 and {}, got {count}",
                    u32::MAX
                ))
            })?,
            None => defaults.retry_count,
        };

        let page_limit = self.page_limit.unwrap_or(defaults.page_limit);
        if page_limit == 0 {
            return Err(Error::invalid_config("page limit must be positive"));
        }

        let timeout = self.timeout.unwrap_or(defaults.timeout);
        if timeout.is_zero() {
            return Err(Error::invalid_config("timeout must be positive"));
        }

        let retry_wait = self.retry_wait.unwrap_or(defaults.retry_wait);
        let max_retry_wait = self
            .max_retry_wait
            .unwrap_or(defaults.max_retry_wait)
            .max(retry_wait);

        Ok(ClientConfig {
            base_url,
            timeout,
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
            retry_count,
            retry_wait,
            max_retry_wait,
            debug: self.debug.unwrap_or(defaults.debug),
            page_limit,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::invalid_config(format!("base URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::invalid_config(format!(
            "base URL {raw:?} cannot carry resource paths"
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        check!(config.base_url.as_str() == "https://api.lokalise.co/api2/");
        check!(config.retry_count == 3);
        check!(config.retry_wait == Duration::from_millis(100));
        check!(config.timeout == Duration::from_secs(30));
        check!(config.page_limit == 100);
        check!(!config.debug);
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:8080/api2")
            .retry_count(0)
            .retry_wait(Duration::from_millis(5))
            .timeout(Duration::from_secs(60))
            .debug(true)
            .page_limit(500)
            .build()
            .expect("valid config");

        check!(config.base_url.as_str() == "http://127.0.0.1:8080/api2");
        check!(config.retry_count == 0);
        check!(config.retry_wait == Duration::from_millis(5));
        check!(config.timeout == Duration::from_secs(60));
        check!(config.debug);
        check!(config.page_limit == 500);
    }

    #[test]
    fn negative_retry_count_fails() {
        let result = ClientConfig::builder().retry_count(-1).build();
        let_assert!(Err(Error::InvalidConfig(message)) = result);
        check!(message.contains("retry count"));
    }

    #[test]
    fn zero_page_limit_fails() {
        let_assert!(Err(Error::InvalidConfig(_)) = ClientConfig::builder().page_limit(0).build());
    }

    #[test]
    fn invalid_base_url_fails() {
        for raw in ["not a url", "mailto:team@example.com"] {
            let result = ClientConfig::builder().base_url(raw).build();
            let_assert!(Err(Error::InvalidConfig(_)) = result);
        }
    }

    #[test]
    fn max_retry_wait_never_below_retry_wait() {
        let config = ClientConfig::builder()
            .retry_wait(Duration::from_secs(5))
            .max_retry_wait(Duration::from_secs(1))
            .build()
            .expect("valid config");
        check!(config.max_retry_wait == Duration::from_secs(5));
    }
}
