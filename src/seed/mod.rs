//! Record Synthesis Module
//!
//! Turns raw catalog records into the normalized documents the storefront
//! serves.
//!
//! ## Core Rules
//! - **Identity**: The document ID is the last path segment of the catalog
//!   key, so re-running the seeder addresses the same documents.
//! - **Defaults**: Missing titles and authors are replaced with fixed
//!   sentinel values instead of being rejected.
//! - **Commerce metadata**: Price, availability, category, and popularity are
//!   randomized from an injectable `Rng` so tests can pin the outcome with a
//!   seeded generator.

pub mod synthesizer;
pub mod types;
