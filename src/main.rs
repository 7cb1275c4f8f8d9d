use bookstore_seeder::catalog::client::CatalogClient;
use bookstore_seeder::config::types::SeedConfig;
use bookstore_seeder::runner::service::SeedRunner;
use bookstore_seeder::runner::types::RunSummary;
use bookstore_seeder::store::http::HttpStore;
use bookstore_seeder::store::memory::MemoryStore;
use bookstore_seeder::store::protocol::{DocumentStore, ServiceAccount};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<String> = None;
    let mut credentials_path = String::from("serviceAccount.json");
    let mut dry_run = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--credentials" => {
                credentials_path = args[i + 1].clone();
                i += 2;
            }
            "--dry-run" => {
                dry_run = true;
                i += 1;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--config <path>] [--credentials <path>] [--dry-run]",
                    args[0]
                );
                eprintln!("  --config <path>       Seed plan overrides (JSON), defaults built in");
                eprintln!("  --credentials <path>  Service account file (default: serviceAccount.json)");
                eprintln!("  --dry-run             Write to an in-memory store instead of the database");
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    let config = match &config_path {
        Some(path) => SeedConfig::load(path)?,
        None => SeedConfig::default(),
    };

    tracing::info!(
        "Starting seeding run: {} queries, limit {} per query",
        config.queries.len(),
        config.limit
    );

    let catalog = CatalogClient::new(&config.catalog_url);

    let summary = if dry_run {
        tracing::info!("Dry run: writing to an in-memory store");
        run_seed(catalog, MemoryStore::new(), config).await
    } else {
        let account = ServiceAccount::load(&credentials_path)?;
        let store = HttpStore::new(account, &config.collection);
        run_seed(catalog, store, config).await
    };

    tracing::info!(
        "Seeding run complete: {} fetched, {} added, {} skipped, {} failed",
        summary.total_fetched(),
        summary.total_added(),
        summary.total_skipped(),
        summary.total_failed()
    );
    tracing::info!("Total books added: {}", summary.total_added());

    Ok(())
}

async fn run_seed<S: DocumentStore>(
    catalog: CatalogClient,
    store: S,
    config: SeedConfig,
) -> RunSummary {
    SeedRunner::new(catalog, store, config).run().await
}
