//! Catalog Intake Module
//!
//! Handles the acquisition of raw book records from the external Open Library
//! search API.
//!
//! ## Workflow
//! 1. **Search**: Issues a GET against the catalog's `search.json` endpoint
//!    for a query term and result limit.
//! 2. **Parse**: Deserializes the `docs` array into `RawRecord` values,
//!    dropping records whose key cannot yield a document identity.
//! 3. **Fail-soft**: Any transport or HTTP failure is logged and converted
//!    into an empty result list so the run continues with the next query.
//!
//! ## Submodules
//! - **`client`**: The `CatalogSource` contract and its HTTP implementation.
//! - **`types`**: Data Transfer Objects (DTOs) for the search API response.

pub mod client;
pub mod types;

#[cfg(test)]
mod tests;
