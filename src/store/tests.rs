//! Store Module Tests
//!
//! Validates the in-memory store's semantics and credential loading.
//!
//! ## Test Scopes
//! - **MemoryStore**: Existence checks, inserts, shared handles, and
//!   last-write-wins overwrites.
//! - **ServiceAccount**: Credential file parsing and failure modes.
//!
//! *Note: The HTTP store is a thin request wrapper over the same contract;
//! its behavior against a live database is covered by dry-run comparisons,
//! not unit tests.*

#[cfg(test)]
mod tests {
    use crate::seed::types::BookDocument;
    use crate::store::memory::MemoryStore;
    use crate::store::protocol::{DocumentStore, ServiceAccount};

    fn sample_document(id: &str, title: &str) -> BookDocument {
        BookDocument {
            id: id.to_string(),
            title: title.to_string(),
            author: "Test Author".to_string(),
            price: 9.99,
            availability: true,
            cover_id: None,
            category: "History".to_string(),
            first_publish_year: 2001,
            mock_popularity: 500,
        }
    }

    // ============================================================
    // MEMORY STORE
    // ============================================================

    #[tokio::test]
    async fn test_memory_store_insert_and_exists() {
        let store = MemoryStore::new();

        assert!(!store.exists("OL1W").await.unwrap());

        store
            .insert("OL1W", &sample_document("OL1W", "First"))
            .await
            .unwrap();

        assert!(store.exists("OL1W").await.unwrap());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_get_returns_stored_document() {
        let store = MemoryStore::new();
        let document = sample_document("OL2W", "Second");

        store.insert("OL2W", &document).await.unwrap();

        assert_eq!(store.get("OL2W"), Some(document));
        assert_eq!(store.get("missing"), None);
    }

    #[tokio::test]
    async fn test_memory_store_last_write_wins() {
        let store = MemoryStore::new();

        store
            .insert("OL3W", &sample_document("OL3W", "Original"))
            .await
            .unwrap();
        store
            .insert("OL3W", &sample_document("OL3W", "Replacement"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("OL3W").unwrap().title, "Replacement");
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_documents() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store
            .insert("OL4W", &sample_document("OL4W", "Shared"))
            .await
            .unwrap();

        assert!(handle.exists("OL4W").await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_store_ids_sorted() {
        let store = MemoryStore::new();

        for id in ["OL9W", "OL1W", "OL5W"] {
            store.insert(id, &sample_document(id, id)).await.unwrap();
        }

        assert_eq!(store.ids(), vec!["OL1W", "OL5W", "OL9W"]);
    }

    // ============================================================
    // SERVICE ACCOUNT
    // ============================================================

    #[test]
    fn test_service_account_load() {
        let path = std::env::temp_dir().join("seeder_account_valid.json");
        std::fs::write(
            &path,
            r#"{"database_url": "https://db.example.com/v1/", "token": "secret"}"#,
        )
        .unwrap();

        let account = ServiceAccount::load(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(account.database_url, "https://db.example.com/v1/");
        assert_eq!(account.token, "secret");
    }

    #[test]
    fn test_service_account_missing_file() {
        let result = ServiceAccount::load("/nonexistent/serviceAccount.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_service_account_malformed_file() {
        let path = std::env::temp_dir().join("seeder_account_malformed.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = ServiceAccount::load(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_service_account_missing_token_field() {
        let path = std::env::temp_dir().join("seeder_account_incomplete.json");
        std::fs::write(&path, r#"{"database_url": "https://db.example.com"}"#).unwrap();

        let result = ServiceAccount::load(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
