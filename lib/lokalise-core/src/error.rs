//! Error types for the lokalise client.

use derive_more::{Display, Error, From};
use serde::Deserialize;

// ============================================================================
// Error Decoder Trait
// ============================================================================

/// Trait for decoding HTTP error responses into domain errors.
///
/// The decoder receives the HTTP status code and the raw response body.
/// It returns `None` when the response is not an error.
///
/// # Example
///
/// ```
/// use lokalise_core::{EnvelopeErrorDecoder, Error, ErrorDecoder};
///
/// let body = bytes::Bytes::from(r#"{"error":{"code":404,"message":"not found"}}"#);
/// let error = EnvelopeErrorDecoder.decode(404, &body);
/// assert_eq!(error.map(|e| e.to_string()).as_deref(), Some("API request error 404 not found"));
/// ```
pub trait ErrorDecoder: Send + Sync + 'static {
    /// Decode an HTTP response into a domain error.
    ///
    /// Returns `None` when the status does not indicate an error.
    fn decode(&self, status: u16, body: &bytes::Bytes) -> Option<Error>;
}

/// Decoder for the Lokalise error envelope.
///
/// Error responses are wrapped as `{ "error": { "code": 404, "message": "..." } }`.
/// A few endpoints answer with the object unwrapped, which is accepted too.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeErrorDecoder;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    Nested { error: ErrorObject },
    Flat(ErrorObject),
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl ErrorDecoder for EnvelopeErrorDecoder {
    fn decode(&self, status: u16, body: &bytes::Bytes) -> Option<Error> {
        if status < 400 {
            return None;
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Some(Error::ErrorWithoutData { status });
        }

        let error = match serde_json::from_slice::<Envelope>(body) {
            Ok(Envelope::Nested { error } | Envelope::Flat(error)) if error.code != 0 => {
                Error::api(error.code, error.message)
            }
            _ => Error::UnknownErrorModel { status },
        };
        Some(error)
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for lokalise operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Error envelope returned by the API.
    #[display("API request error {code} {message}")]
    #[from(skip)]
    Api {
        /// Error code from the envelope, usually the HTTP status.
        code: i64,
        /// Human readable message from the envelope.
        message: String,
    },

    /// The response status flagged an error but the body was empty.
    #[display("response marked as error but no data")]
    #[from(skip)]
    ErrorWithoutData {
        /// HTTP status code.
        status: u16,
    },

    /// The response status flagged an error but the body is not an error envelope.
    #[display("error model unknown")]
    #[from(skip)]
    UnknownErrorModel {
        /// HTTP status code.
        status: u16,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The caller cancelled the operation.
    #[display("request cancelled")]
    #[from(skip)]
    Cancelled,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Invalid client configuration, reported when the client is built.
    #[display("invalid configuration: {_0}")]
    #[from(skip)]
    InvalidConfig(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "keys[0].key_name").
        path: String,
        /// Error message.
        message: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an API error from the envelope code and message.
    #[must_use]
    pub fn api(code: i64, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the operation was cancelled by the caller.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if no response arrived because of a transport failure.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_) | Self::Timeout)
    }

    /// Returns the envelope code if this is an API error.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the HTTP status for errors that carry one, or the envelope code.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => u16::try_from(*code).ok(),
            Self::ErrorWithoutData { status } | Self::UnknownErrorModel { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;

    #[test]
    fn error_display() {
        insta::assert_snapshot!(Error::api(404, "not found"), @"API request error 404 not found");
        insta::assert_snapshot!(
            Error::ErrorWithoutData { status: 500 },
            @"response marked as error but no data"
        );
        insta::assert_snapshot!(Error::UnknownErrorModel { status: 502 }, @"error model unknown");
        insta::assert_snapshot!(Error::Timeout, @"request timeout");
        insta::assert_snapshot!(Error::Cancelled, @"request cancelled");
        insta::assert_snapshot!(
            Error::connection("failed to connect"),
            @"connection error: failed to connect"
        );
        insta::assert_snapshot!(
            Error::json_deserialization("keys[0].key_id", "invalid type"),
            @"JSON deserialization error at 'keys[0].key_id': invalid type"
        );
    }

    #[test]
    fn error_status() {
        let err = Error::api(404, "not found");
        check!(err.code() == Some(404));
        check!(err.status() == Some(404));
        check!(err.is_client_error());
        check!(err.is_not_found());
        check!(!err.is_server_error());

        let err = Error::ErrorWithoutData { status: 503 };
        check!(err.code().is_none());
        check!(err.is_server_error());

        let err = Error::Timeout;
        check!(err.status().is_none());
        check!(!err.is_client_error());
        check!(!err.is_server_error());
    }

    #[test]
    fn error_kinds() {
        check!(Error::Timeout.is_timeout());
        check!(Error::Timeout.is_transient());
        check!(Error::connection("reset").is_connection());
        check!(Error::tls("bad certificate").is_transient());
        check!(Error::Cancelled.is_cancelled());
        check!(!Error::Cancelled.is_transient());
        check!(!Error::api(500, "boom").is_transient());
    }

    #[test]
    fn decoder_ignores_success() {
        let body = Bytes::from(r#"{"projects":[]}"#);
        check!(EnvelopeErrorDecoder.decode(200, &body).is_none());
        check!(EnvelopeErrorDecoder.decode(399, &Bytes::new()).is_none());
    }

    #[test]
    fn decoder_reads_nested_envelope() {
        let body = Bytes::from(r#"{"error":{"code":404,"message":"not found"}}"#);
        let_assert!(Some(Error::Api { code, message }) = EnvelopeErrorDecoder.decode(404, &body));
        check!(code == 404);
        check!(message == "not found");
    }

    #[test]
    fn decoder_reads_flat_envelope() {
        let body = Bytes::from(r#"{"code":401,"message":"Invalid `X-Api-Token` header"}"#);
        let_assert!(Some(Error::Api { code, message }) = EnvelopeErrorDecoder.decode(401, &body));
        check!(code == 401);
        check!(message == "Invalid `X-Api-Token` header");
    }

    #[test]
    fn decoder_without_data() {
        let_assert!(
            Some(Error::ErrorWithoutData { status }) =
                EnvelopeErrorDecoder.decode(500, &Bytes::new())
        );
        check!(status == 500);

        let body = Bytes::from("  \n");
        let_assert!(Some(Error::ErrorWithoutData { .. }) = EnvelopeErrorDecoder.decode(502, &body));
    }

    #[test]
    fn decoder_unknown_model() {
        let body = Bytes::from("<html>Bad Gateway</html>");
        let_assert!(
            Some(Error::UnknownErrorModel { status }) = EnvelopeErrorDecoder.decode(502, &body)
        );
        check!(status == 502);

        let body = Bytes::from(r#"{"error":{"code":0,"message":"zero"}}"#);
        let_assert!(
            Some(Error::UnknownErrorModel { .. }) = EnvelopeErrorDecoder.decode(400, &body)
        );

        let body = Bytes::from(r#"{"error":"something"}"#);
        let_assert!(
            Some(Error::UnknownErrorModel { .. }) = EnvelopeErrorDecoder.decode(400, &body)
        );
    }

    #[test]
    fn decoder_is_deterministic() {
        let body = Bytes::from(r#"{"error":{"code":404,"message":"not found"}}"#);
        let first = EnvelopeErrorDecoder.decode(404, &body).map(|e| e.to_string());
        let second = EnvelopeErrorDecoder.decode(404, &body).map(|e| e.to_string());
        check!(first == second);
    }
}
