use super::types::{RawRecord, SearchResponse};
use crate::seed::synthesizer::book_id_from_key;

use anyhow::Result;
use async_trait::async_trait;

/// Fields requested from the search endpoint. Keeps response payloads small
/// and matches exactly what the synthesizer consumes.
const SEARCH_FIELDS: &str = "key,title,author_name,cover_i,first_publish_year";

/// Source of raw catalog records.
///
/// The runner is generic over this trait so tests can substitute a stub
/// without any network access. Implementations own the fail-soft policy:
/// a fetch never returns an error, only a possibly empty list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_books(&self, query: &str, limit: u32) -> Vec<RawRecord>;
}

/// HTTP client for the Open Library search API.
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Performs the search request and parses the response.
    ///
    /// Records whose `key` yields no document identity are dropped here with
    /// a warning; they cannot be addressed in the collection.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<RawRecord>> {
        let url = format!("{}/search.json", self.base_url);
        let limit_param = limit.to_string();

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("q", query),
                ("fields", SEARCH_FIELDS),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Catalog search failed: {}",
                response.status()
            ));
        }

        let body: SearchResponse = response.json().await?;

        let records = body
            .docs
            .into_iter()
            .filter(|record| {
                if book_id_from_key(&record.key).is_none() {
                    tracing::warn!("Dropping record with unusable key {:?}", record.key);
                    return false;
                }
                true
            })
            .collect();

        Ok(records)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    /// Fetches up to `limit` records for a query term.
    ///
    /// Failures are absorbed: the error is logged and an empty list returned,
    /// so one bad query never aborts the whole seeding run. No retry.
    async fn fetch_books(&self, query: &str, limit: u32) -> Vec<RawRecord> {
        match self.search(query, limit).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error fetching books for query \"{}\": {}", query, e);
                Vec::new()
            }
        }
    }
}
