//! Seed Plan Configuration
//!
//! The query terms, per-query limit, category labels, and target collection
//! for a seeding run. Defaults reproduce the storefront's standard plan; a
//! JSON file can override any subset of fields, which is also how tests
//! inject controlled inputs.

pub mod types;
