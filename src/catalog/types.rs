//! Catalog Data Types
//!
//! Defines the Data Transfer Objects (DTOs) for the Open Library search API.
//! Only the fields the seeder requests are modeled; anything else in the
//! response is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// A single search result from the book catalog.
///
/// Every field except `key` is optional in the upstream API; the synthesizer
/// substitutes defaults for the missing ones. The `key` is a path such as
/// `/works/OL42W` whose last segment becomes the document identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub key: String,
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub cover_i: Option<u64>,
    pub first_publish_year: Option<u32>,
}

/// Top-level shape of the catalog search response.
///
/// The API wraps results in a `docs` array; a response without one is treated
/// as zero results rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<RawRecord>,
}
