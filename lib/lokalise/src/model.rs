//! Types shared by several resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Key name, either one string for every platform or one per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyName {
    /// Same name on every platform.
    Plain(String),
    /// Per-platform names.
    PerPlatform(PlatformNames),
}

impl Default for KeyName {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<&str> for KeyName {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for KeyName {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

/// Key names per platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformNames {
    /// iOS name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ios: String,
    /// Android name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub android: String,
    /// Web name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub web: String,
    /// Name for any other platform.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub other: String,
}

/// Translation text, either a single string or plural forms keyed by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// Singular text.
    Text(String),
    /// Plural forms (`one`, `few`, `other`, ...).
    Plural(BTreeMap<String, String>),
}

impl Default for TranslationValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for TranslationValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Custom attributes of a key: raw JSON text or a structured object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomAttributes {
    /// Attributes sent as a JSON-encoded string.
    Text(String),
    /// Attributes sent as an object.
    Structured(serde_json::Map<String, serde_json::Value>),
}

/// Error reported for one item of a batch request.
///
/// Extra fields identifying the failed item (such as the offending key) are
/// kept in `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemError {
    /// Human readable reason.
    pub message: String,
    /// Error code.
    pub code: i64,
    /// Remaining fields of the error object.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Read `null` as the default value, for nullable numeric fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-language progress entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageProgress {
    /// Language identifier.
    pub language_id: i64,
    /// Language code.
    pub language_iso: String,
    /// Completion percentage.
    pub progress: i64,
    /// Words left to translate.
    pub words_to_do: i64,
}
