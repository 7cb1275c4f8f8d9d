//! Seed Data Types
//!
//! Defines the document shape written to the book collection. The wire format
//! mirrors what the storefront reads, including the legacy `mockPopularity`
//! field name used by its sort-order demos.

use serde::{Deserialize, Serialize};

/// A normalized book document with randomized commerce metadata.
///
/// `id` doubles as the write target's identity in the collection, which makes
/// seeding runs idempotent: an existing ID is skipped, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Uniform in [5.00, 50.00], rounded to two decimals.
    pub price: f64,
    /// True with 80% probability.
    pub availability: bool,
    /// The catalog's numeric cover identifier rendered as a string, when present.
    pub cover_id: Option<String>,
    pub category: String,
    /// Source value, or 0 when the catalog has none.
    pub first_publish_year: u32,
    /// Random in [0, 999], only used for sort-order demos.
    #[serde(rename = "mockPopularity")]
    pub mock_popularity: u32,
}
