//! Document Store Module
//!
//! Persistence layer for the book collection.
//!
//! ## Core Concepts
//! - **Identity addressing**: Every document is read and written by its ID;
//!   no compound queries are used.
//! - **Check-then-act**: The writer asks `exists` before `insert`. The pair
//!   is not atomic; the seeder is assumed to be the sole writer during a run
//!   (last write wins otherwise).
//! - **Backends**: `HttpStore` talks to the real document database over
//!   HTTP+JSON with a bearer token from the service account file;
//!   `MemoryStore` keeps documents in a DashMap for tests and dry runs.

pub mod http;
pub mod memory;
pub mod protocol;

#[cfg(test)]
mod tests;
