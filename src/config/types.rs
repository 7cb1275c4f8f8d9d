use anyhow::Result;
use serde::Deserialize;

/// Standard search terms, one per storefront shelf or featured author.
pub const DEFAULT_QUERIES: [&str; 10] = [
    "horror",
    "comics",
    "history",
    "best selling",
    "trending books",
    "new releases",
    "editors picks",
    "stephen king",
    "j.k. rowling",
    "graphic novels",
];

/// Category labels shown in the storefront; assigned uniformly at random.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Best Selling Books",
    "Trending Books",
    "New Arrivals",
    "Editor's Picks",
    "Horror",
    "Comics",
    "History",
];

pub const DEFAULT_LIMIT: u32 = 50;
pub const DEFAULT_COLLECTION: &str = "books";
pub const DEFAULT_CATALOG_URL: &str = "https://openlibrary.org";

/// The seed plan for one run.
///
/// Every field falls back to its default when missing from the override
/// file, so a config JSON only needs to name what it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Query terms sent to the catalog, in order.
    pub queries: Vec<String>,
    /// Maximum records requested per query.
    pub limit: u32,
    /// Labels the synthesizer picks categories from.
    pub categories: Vec<String>,
    /// Target collection in the document database.
    pub collection: String,
    /// Base URL of the catalog search API.
    pub catalog_url: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            queries: DEFAULT_QUERIES.iter().map(|s| s.to_string()).collect(),
            limit: DEFAULT_LIMIT,
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            collection: DEFAULT_COLLECTION.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

impl SeedConfig {
    /// Loads overrides from a JSON file on top of the defaults.
    ///
    /// An empty query or category list is rejected; either would make the
    /// run a no-op.
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read seed config {}: {}", path, e))?;
        let config: SeedConfig = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse seed config {}: {}", path, e))?;

        if config.queries.is_empty() {
            return Err(anyhow::anyhow!("Seed config lists no query terms"));
        }
        if config.categories.is_empty() {
            return Err(anyhow::anyhow!("Seed config lists no category labels"));
        }

        Ok(config)
    }
}
