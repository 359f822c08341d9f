//! Tower middleware layers for the API client.
//!
//! The transport stacks them as
//! `TokenAuth -> Retry -> Logging -> hyper`, so the token is set once per
//! call and every attempt is logged on its own.
//!
//! - [`TokenAuthLayer`] - Adds the `X-Api-Token` header
//! - [`RetryPolicy`] - Retry policy for [`RetryLayer`]
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`

mod logging;
mod retry;
mod token_auth;

pub use logging::{LogLevel, Logging, LoggingLayer};
pub use retry::{RetryCondition, RetryPolicy, default_retry_condition};
pub use token_auth::{API_TOKEN_HEADER, TokenAuth, TokenAuthLayer};
pub use tower::retry::RetryLayer;
pub use tower::{Layer, Service};
