//! Url mapping entity: one long URL paired with one short code.

use serde::{Deserialize, Serialize};

/// A persisted association between a long URL and its short code.
///
/// Mappings are created once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, long_url: String, short_url: String) -> Self {
        Self {
            id,
            long_url,
            short_url,
        }
    }
}

/// Read-only projection of a [`UrlMapping`] returned by every operation.
///
/// Carries no identity. Serialized as `{"longUrl": ..., "shortUrl": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongUrlShortUrl {
    pub long_url: String,
    pub short_url: String,
}

impl From<UrlMapping> for LongUrlShortUrl {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            long_url: mapping.long_url,
            short_url: mapping.short_url,
        }
    }
}

/// Input data for inserting a new mapping. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub long_url: String,
    pub short_url: String,
}

/// Field a single-mapping lookup filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    ShortUrl(String),
    LongUrl(String),
}

impl LookupKey {
    pub fn short_url(code: impl Into<String>) -> Self {
        Self::ShortUrl(code.into())
    }

    pub fn long_url(url: impl Into<String>) -> Self {
        Self::LongUrl(url.into())
    }

    /// Returns true if `mapping` matches this key.
    pub fn matches(&self, mapping: &UrlMapping) -> bool {
        match self {
            LookupKey::ShortUrl(code) => mapping.short_url == *code,
            LookupKey::LongUrl(url) => mapping.long_url == *url,
        }
    }
}
