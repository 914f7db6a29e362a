//! Harvest orchestration across keywords
//!
//! The orchestrator runs discovery sequentially per keyword, fans detail
//! resolution out over a bounded worker pool, and funnels every result
//! through a channel into a single collector loop. The collector is the only
//! writer into the batch, so no lock guards the accumulator. The pool is
//! fully drained before the next keyword begins.

use crate::config::Config;
use crate::harvest::discovery::discover;
use crate::harvest::fetcher::build_http_client;
use crate::harvest::resolver::resolve;
use crate::output::collection::write_collection;
use crate::records::{JobId, JobRecord};
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};

/// Owns the HTTP client and configuration for one harvest run
pub struct Harvester {
    config: Arc<Config>,
    client: Client,
}

impl Harvester {
    /// Creates a new harvester from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The harvest configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to run
    /// * `Err(HarvestError)` - HTTP client construction failed
    pub fn new(config: Config) -> crate::Result<Self> {
        let client = build_http_client(&config.fetcher)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Runs the full harvest and returns the accumulated records
    ///
    /// Keywords are processed in configuration order; within a keyword,
    /// record order is completion order of the concurrent resolutions.
    /// No failure below the configuration layer escapes this method.
    pub async fn run(&self) -> Vec<JobRecord> {
        let search = &self.config.search;
        let mut all_jobs: Vec<JobRecord> = Vec::new();

        for keyword in &search.keywords {
            let ids = discover(
                &self.client,
                search,
                &self.config.pacing,
                keyword,
                search.max_jobs_per_keyword,
            )
            .await;

            tracing::info!("Resolving {} listings for '{}'", ids.len(), keyword);

            let records = self.resolve_batch(keyword, ids).await;
            tracing::info!("Resolved {} records for '{}'", records.len(), keyword);

            all_jobs.extend(records);
        }

        all_jobs
    }

    /// Resolves one keyword's ids with the bounded worker pool
    ///
    /// Workers send their outcome through the channel and exit; the
    /// collector below tags, counts, and throttles. A worker that panics
    /// just drops its sender, which reads as one fewer message.
    async fn resolve_batch(&self, keyword: &str, ids: Vec<JobId>) -> Vec<JobRecord> {
        let pacing = &self.config.pacing;
        let semaphore = Arc::new(Semaphore::new(pacing.workers));
        let (tx, mut rx) = mpsc::channel::<Option<JobRecord>>(pacing.workers);

        for id in ids {
            let semaphore = semaphore.clone();
            let tx = tx.clone();
            let client = self.client.clone();
            let config = self.config.clone();

            tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return,
                };

                let outcome = resolve(&client, &config.search, &config.pacing, &id).await;
                if outcome.is_none() {
                    tracing::warn!("No details resolved for listing {}", id);
                }

                // The collector may already be gone if the runtime is
                // shutting down; nothing to do about it here
                let _ = tx.send(outcome).await;
            });
        }

        // The collector owns the batch: single writer, no locks
        drop(tx);
        let mut records = Vec::new();
        let mut completed = 0usize;

        while let Some(outcome) = rx.recv().await {
            completed += 1;

            if let Some(mut record) = outcome {
                record.keyword = keyword.to_string();
                tracing::info!("Scraped: {}", record.title);
                records.push(record);
            }

            if completed % pacing.throttle_every == 0 {
                tokio::time::sleep(Duration::from_millis(pacing.throttle_pause_ms)).await;
            }
        }

        records
    }
}

/// Runs a complete harvest and persists the collection
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Discover and resolve listings for every keyword
/// 3. Overwrite the persisted collection with the full result
///
/// # Arguments
///
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(Vec<JobRecord>)` - The persisted records
/// * `Err(HarvestError)` - Client construction or persistence failed
pub async fn run_harvest(config: Config) -> crate::Result<Vec<JobRecord>> {
    let collection_path = config.output.collection_path.clone();

    let harvester = Harvester::new(config)?;
    let records = harvester.run().await;

    write_collection(Path::new(&collection_path), &records)?;
    tracing::info!("Saved {} records to {}", records.len(), collection_path);

    Ok(records)
}
