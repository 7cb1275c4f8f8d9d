use super::types::{QueryStats, RunSummary};
use crate::catalog::client::CatalogSource;
use crate::catalog::types::RawRecord;
use crate::config::types::SeedConfig;
use crate::seed::synthesizer::{book_id_from_key, synthesize};
use crate::store::protocol::DocumentStore;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Orchestrates one seeding run.
///
/// Generic over the catalog source, the document store, and the random
/// source so every collaborator can be substituted in tests. Production use
/// is `SeedRunner::new`, which wires an entropy-seeded generator.
pub struct SeedRunner<C, S, R> {
    catalog: C,
    store: S,
    config: SeedConfig,
    rng: R,
}

impl<C, S> SeedRunner<C, S, StdRng>
where
    C: CatalogSource,
    S: DocumentStore,
{
    pub fn new(catalog: C, store: S, config: SeedConfig) -> Self {
        Self::with_rng(catalog, store, config, StdRng::from_entropy())
    }
}

impl<C, S, R> SeedRunner<C, S, R>
where
    C: CatalogSource,
    S: DocumentStore,
    R: Rng + Send,
{
    pub fn with_rng(catalog: C, store: S, config: SeedConfig, rng: R) -> Self {
        Self {
            catalog,
            store,
            config,
            rng,
        }
    }

    /// Runs the full seeding loop across all configured query terms.
    ///
    /// Strictly sequential: one fetch, then one record at a time. Fetch
    /// failures already surface as empty result lists, so this loop only
    /// deals in per-record outcomes.
    pub async fn run(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();
        let queries = self.config.queries.clone();

        for query in &queries {
            tracing::info!("Fetching books for query \"{}\"...", query);
            let records = self.catalog.fetch_books(query, self.config.limit).await;

            let mut stats = QueryStats::new(query);
            stats.fetched = records.len();

            for record in &records {
                self.process_record(record, &mut stats).await;
            }

            tracing::info!(
                "Query \"{}\" done: {} fetched, {} added, {} skipped, {} failed",
                query,
                stats.fetched,
                stats.added,
                stats.skipped,
                stats.failed
            );
            summary.queries.push(stats);
        }

        summary
    }

    /// Deduplicates and writes a single record, updating the counters.
    ///
    /// Check-then-act: the existence check and the insert are separate calls
    /// with no atomicity between them. The seeder is assumed to be the
    /// collection's only writer during a run.
    async fn process_record(&mut self, record: &RawRecord, stats: &mut QueryStats) {
        let Some(book_id) = book_id_from_key(&record.key) else {
            tracing::warn!("Record key {:?} yields no document identity", record.key);
            stats.failed += 1;
            return;
        };

        match self.store.exists(&book_id).await {
            Ok(true) => {
                tracing::info!(
                    "Book \"{}\" ({}) already exists, skipping",
                    record.title.as_deref().unwrap_or("?"),
                    book_id
                );
                stats.skipped += 1;
            }
            Ok(false) => {
                let Some(document) = synthesize(record, &self.config.categories, &mut self.rng)
                else {
                    stats.failed += 1;
                    return;
                };

                match self.store.insert(&document.id, &document).await {
                    Ok(()) => {
                        tracing::info!("Added book \"{}\" ({})", document.title, document.id);
                        stats.added += 1;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Error adding book \"{}\" ({}): {}",
                            document.title,
                            document.id,
                            e
                        );
                        stats.failed += 1;
                    }
                }
            }
            Err(e) => {
                tracing::error!("Existence check failed for {}: {}", book_id, e);
                stats.failed += 1;
            }
        }
    }
}
