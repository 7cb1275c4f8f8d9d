//! Bookstore Seeding Library
//!
//! This library crate defines the components of the one-shot seeding tool that
//! populates the storefront's book collection from the Open Library catalog.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The tool is composed of five loosely coupled subsystems:
//!
//! - **`catalog`**: The data intake layer. Queries the Open Library search API
//!   for raw book records, absorbing transport failures so a single bad query
//!   never aborts a run.
//! - **`config`**: The seed plan. Query terms, per-query limit, category
//!   labels, and target collection, with built-in defaults and optional
//!   overrides from a JSON file.
//! - **`runner`**: The orchestration layer. Drives the fetch -> synthesize ->
//!   deduplicate -> write loop across all query terms and accumulates run
//!   statistics.
//! - **`seed`**: The synthesis layer. Turns a raw catalog record into a
//!   normalized `BookDocument` with randomized commerce metadata (price,
//!   availability, category, popularity).
//! - **`store`**: The persistence layer. A `DocumentStore` contract with an
//!   HTTP document-database client and a DashMap-backed in-memory store for
//!   tests and dry runs.

pub mod catalog;
pub mod config;
pub mod runner;
pub mod seed;
pub mod store;
