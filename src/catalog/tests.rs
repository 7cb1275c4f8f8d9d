//! Catalog Module Tests
//!
//! Validates response parsing and the fail-soft fetch policy.
//!
//! ## Test Scopes
//! - **Parsing**: Tolerance for missing fields and unknown extras in the
//!   search response.
//! - **Fail-soft**: A transport failure yields an empty list, not an error.
//!
//! *Note: Happy-path requests against the live catalog are exercised
//! manually; unit tests stay off the network.*

#[cfg(test)]
mod tests {
    use crate::catalog::client::{CatalogClient, CatalogSource};
    use crate::catalog::types::SearchResponse;

    // ============================================================
    // RESPONSE PARSING
    // ============================================================

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "numFound": 2,
            "q": "dune",
            "docs": [
                {
                    "key": "/works/OL42W",
                    "title": "Dune",
                    "author_name": ["Frank Herbert"],
                    "cover_i": 258027,
                    "first_publish_year": 1965,
                    "edition_count": 70
                },
                {
                    "key": "/works/OL43W",
                    "title": "Dune Messiah"
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.docs.len(), 2);
        assert_eq!(response.docs[0].key, "/works/OL42W");
        assert_eq!(response.docs[0].author_name.as_ref().unwrap().len(), 1);
        assert_eq!(response.docs[0].cover_i, Some(258027));
        assert_eq!(response.docs[1].title.as_deref(), Some("Dune Messiah"));
        assert!(response.docs[1].author_name.is_none());
        assert!(response.docs[1].first_publish_year.is_none());
    }

    #[test]
    fn test_parse_response_without_docs() {
        // Upstream occasionally omits the array entirely; treat as zero results
        let response: SearchResponse = serde_json::from_str(r#"{"numFound": 0}"#).unwrap();
        assert!(response.docs.is_empty());
    }

    #[test]
    fn test_parse_minimal_record() {
        let body = r#"{"docs": [{"key": "/works/OL1W"}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let record = &response.docs[0];
        assert_eq!(record.key, "/works/OL1W");
        assert!(record.title.is_none());
        assert!(record.author_name.is_none());
        assert!(record.cover_i.is_none());
        assert!(record.first_publish_year.is_none());
    }

    #[test]
    fn test_parse_empty_docs() {
        let response: SearchResponse = serde_json::from_str(r#"{"docs": []}"#).unwrap();
        assert!(response.docs.is_empty());
    }

    // ============================================================
    // FAIL-SOFT FETCH
    // ============================================================

    #[tokio::test]
    async fn test_fetch_books_returns_empty_on_transport_error() {
        // Nothing listens here; the connection is refused immediately
        let client = CatalogClient::new("http://127.0.0.1:9");

        let records = client.fetch_books("horror", 50).await;

        assert!(records.is_empty());
    }
}
