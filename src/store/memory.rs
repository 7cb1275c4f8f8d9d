use super::protocol::DocumentStore;
use crate::seed::types::BookDocument;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory document store backed by a DashMap.
///
/// Used by unit tests and `--dry-run` seeding. Clones share the underlying
/// map, so a test can keep a handle while the runner owns another. Matches
/// the HTTP store's observable semantics: existence by key, last write wins.
#[derive(Clone, Default)]
pub struct MemoryStore {
    documents: Arc<DashMap<String, BookDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<BookDocument> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    /// All stored IDs in sorted order, for test assertions.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .documents
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.documents.contains_key(id))
    }

    async fn insert(&self, id: &str, document: &BookDocument) -> Result<()> {
        self.documents.insert(id.to_string(), document.clone());
        Ok(())
    }
}
