//! Store Contract
//!
//! Defines the operations the writer needs from a document database and the
//! credential shape used to reach the real one.
//!
//! Both operations address a single document by identity. `None`/404-style
//! absence is surfaced as `Ok(false)` from `exists`; genuine transport or
//! server failures come back as errors so the runner can count them.

use crate::seed::types::BookDocument;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Point read/write access to the book collection.
///
/// The runner is generic over this trait; tests inject `MemoryStore` while
/// production wires `HttpStore`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point lookup: does a document with this ID exist in the collection?
    async fn exists(&self, id: &str) -> Result<bool>;

    /// Creates the document at the given identity.
    ///
    /// Callers must only invoke this after `exists` returned false in the
    /// same run; the store itself enforces no uniqueness.
    async fn insert(&self, id: &str, document: &BookDocument) -> Result<()>;
}

/// Credentials for the document database, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    /// Root URL of the database's document API.
    pub database_url: String,
    /// Bearer token presented on every request.
    pub token: String,
}

impl ServiceAccount {
    /// Reads and parses the local credential file.
    ///
    /// A missing or malformed file is fatal to the run; there is no
    /// anonymous fallback.
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read service account {}: {}", path, e))?;
        let account: ServiceAccount = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse service account {}: {}", path, e))?;
        Ok(account)
    }
}
