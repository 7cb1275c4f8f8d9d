//! Seeding Run Orchestration
//!
//! Drives one full seeding run: for every configured query term, fetch
//! catalog records, synthesize documents, and write the ones that are not
//! already in the collection.
//!
//! ## Execution Model
//! Strictly sequential: each catalog fetch and each existence-check/write is
//! awaited to completion before the next. The run is bounded at queries x
//! limit documents; no tasks are spawned and nothing is coordinated.
//!
//! ## Failure Isolation
//! Failures are contained at the narrowest scope that lets the run continue:
//! a failed fetch costs one query's results, a failed write costs one
//! document. Only startup errors (credentials, config) abort the process.
//!
//! ## Submodules
//! - **`service`**: The `SeedRunner` driving the fetch -> synthesize ->
//!   deduplicate -> write loop.
//! - **`types`**: Per-query and whole-run statistics.

pub mod service;
pub mod types;
