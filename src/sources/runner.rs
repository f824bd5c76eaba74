use std::time::Duration;

use sqlx::PgPool;

use crate::config::Config;
use crate::error::AppError;
use crate::models::listing::Listing;
use crate::sources::{JobSource, all_sources, get_source};

/// Outcome of one sync cycle.
#[derive(Debug, Default)]
pub struct SyncOutcome {
    /// Postings fetched and normalized across sources.
    pub found: usize,
    /// Postings newly inserted (not seen in any earlier run).
    pub inserted: usize,
}

/// Shared HTTP client for all source calls.
pub fn http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .user_agent(concat!("jobradar/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(20))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))
}

/// Run one sync cycle over every registered source. A failing source is
/// logged and skipped so one bad upstream cannot abort the cycle; only
/// store errors propagate.
pub async fn sync_all(
    pool: &PgPool,
    client: &reqwest::Client,
    config: &Config,
) -> Result<SyncOutcome, AppError> {
    let mut outcome = SyncOutcome::default();
    for source in all_sources() {
        match sync_source(pool, client, config, &*source).await {
            Ok((found, inserted)) => {
                outcome.found += found;
                outcome.inserted += inserted;
            }
            Err(AppError::Database(e)) => return Err(AppError::Database(e)),
            Err(e) => {
                tracing::warn!("Source '{}' failed, skipping: {e}", source.name());
            }
        }
    }
    tracing::info!(
        "Sync cycle complete: {} found, {} new",
        outcome.found,
        outcome.inserted
    );
    Ok(outcome)
}

/// Fetch one source and ingest its batch. Returns (found, inserted).
pub async fn sync_source(
    pool: &PgPool,
    client: &reqwest::Client,
    config: &Config,
    source: &dyn JobSource,
) -> Result<(usize, usize), AppError> {
    let batch = source.fetch(client, config).await?;
    let found = batch.len();
    let inserted = Listing::insert_batch(pool, batch).await?.len();
    tracing::info!("Source '{}': {found} found, {inserted} new", source.name());
    Ok((found, inserted))
}

async fn run_cycle(
    pool: &PgPool,
    client: &reqwest::Client,
    config: &Config,
    source_name: Option<&str>,
) -> Result<SyncOutcome, AppError> {
    match source_name.and_then(get_source) {
        Some(source) => sync_source(pool, client, config, &*source)
            .await
            .map(|(found, inserted)| SyncOutcome { found, inserted }),
        None => sync_all(pool, client, config).await,
    }
}

/// CLI entry: sync once, or every `interval` seconds until ctrl_c.
pub async fn run(
    pool: PgPool,
    config: &Config,
    source_name: Option<&str>,
    interval: Option<u64>,
) -> anyhow::Result<()> {
    if let Some(name) = source_name
        && get_source(name).is_none()
    {
        anyhow::bail!("Unknown source: {name}");
    }

    let client = http_client()?;

    let Some(every) = interval else {
        run_cycle(&pool, &client, config, source_name).await?;
        return Ok(());
    };

    tracing::info!("Sync worker started, running every {every}s");
    loop {
        tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received, exiting gracefully");
                break;
            }
            _ = async {
                if let Err(e) = run_cycle(&pool, &client, config, source_name).await {
                    tracing::error!("Sync cycle failed: {e}");
                }
                tokio::time::sleep(Duration::from_secs(every)).await;
            } => {}
        }
    }

    Ok(())
}
