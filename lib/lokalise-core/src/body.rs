//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// MIME type used for every request and response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use lokalise_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NewComment { comment: String }
///
/// let comment = NewComment { comment: "hi".to_string() };
/// let bytes = to_json(&comment).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"comment":"hi"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the field that failed,
/// e.g. `keys[0].translations[1].modified_at_timestamp`.
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
///
/// # Example
///
/// ```
/// use lokalise_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Team { team_id: i64 }
///
/// let team: Team = from_json(br#"{"team_id":12345}"#).expect("deserialize");
/// assert_eq!(team, Team { team_id: 12345 });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
