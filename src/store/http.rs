use super::protocol::{DocumentStore, ServiceAccount};
use crate::seed::types::BookDocument;

use anyhow::Result;
use async_trait::async_trait;

/// HTTP client for the document database.
///
/// Documents live at `{database_url}/{collection}/{id}`; a GET answers the
/// existence check (404 means absent) and a PUT creates the document. Every
/// request carries the service account token as a bearer header.
pub struct HttpStore {
    http_client: reqwest::Client,
    collection_url: String,
    token: String,
}

impl HttpStore {
    pub fn new(account: ServiceAccount, collection: &str) -> Self {
        let base = account.database_url.trim_end_matches('/');
        Self {
            http_client: reqwest::Client::new(),
            collection_url: format!("{}/{}", base, collection),
            token: account.token,
        }
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    async fn exists(&self, id: &str) -> Result<bool> {
        let response = self
            .http_client
            .get(self.document_url(id))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Existence check failed for {}: {}",
                id,
                response.status()
            ));
        }

        Ok(true)
    }

    async fn insert(&self, id: &str, document: &BookDocument) -> Result<()> {
        let response = self
            .http_client
            .put(self.document_url(id))
            .bearer_auth(&self.token)
            .json(document)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Write failed for {}: {}",
                id,
                response.status()
            ));
        }

        Ok(())
    }
}
