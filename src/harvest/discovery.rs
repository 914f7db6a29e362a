//! Listing discovery across paginated search results
//!
//! Discovery is single-tasked and strictly sequential: one search page at a
//! time, a jittered pause between pages, and a handful of stop conditions
//! that all degrade to returning whatever was accumulated so far.

use crate::config::{PacingConfig, SearchConfig};
use crate::harvest::extract::parse_search_page;
use crate::harvest::fetcher::fetch_page;
use crate::harvest::pacing::jitter;
use crate::records::JobId;
use reqwest::Client;
use std::collections::HashSet;

/// Listings per search-results page on the upstream endpoint
pub const PAGE_SIZE: usize = 25;

/// Collects up to `limit` listing ids for one keyword
///
/// # Stop conditions
///
/// | Condition | Meaning |
/// |-----------|---------|
/// | Transport failure | Partial result, page unreachable |
/// | Non-success status | Partial result, upstream refused the page |
/// | Zero fragments | Results exhausted |
/// | Fragments but zero ids | Page shape changed, nothing extractable |
/// | Zero *new unique* ids | Exhaustion (upstream repeats its tail) |
///
/// Each stops the loop and returns what was accumulated; none of them is an
/// error from the caller's point of view. The log line distinguishes
/// "no more jobs" from "could not parse".
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `search` - Search endpoint and location configuration
/// * `pacing` - Inter-page delay configuration
/// * `keyword` - The keyword to search for
/// * `limit` - Maximum number of ids to return
///
/// # Returns
///
/// At most `limit` unique ids in discovery order. A `limit` of zero returns
/// empty without touching the network.
pub async fn discover(
    client: &Client,
    search: &SearchConfig,
    pacing: &PacingConfig,
    keyword: &str,
    limit: usize,
) -> Vec<JobId> {
    if limit == 0 {
        return Vec::new();
    }

    let mut ids: Vec<JobId> = Vec::new();
    let mut seen: HashSet<JobId> = HashSet::new();
    let mut offset = 0usize;

    tracing::info!("Collecting listing ids for '{}' in '{}'", keyword, search.location);

    while ids.len() < limit {
        let offset_param = offset.to_string();
        let params = [
            ("keywords", keyword),
            ("location", search.location.as_str()),
            ("start", offset_param.as_str()),
            ("trk", "public_jobs_jobs-search-bar_search-submit"),
        ];

        let page = match fetch_page(client, &search.search_url, &params).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Search fetch failed at offset {}: {}", offset, e);
                break;
            }
        };

        if !page.is_success() {
            tracing::warn!(
                "Search page at offset {} returned status {}, stopping",
                offset,
                page.status
            );
            break;
        }

        let parsed = parse_search_page(&page.body);

        if parsed.fragment_count == 0 {
            tracing::info!("No more listings for '{}' at offset {}", keyword, offset);
            break;
        }

        if parsed.ids.is_empty() {
            tracing::warn!(
                "Could not extract any listing ids from {} fragments at offset {}",
                parsed.fragment_count,
                offset
            );
            break;
        }

        let new_ids: Vec<JobId> = parsed
            .ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        if new_ids.is_empty() {
            tracing::info!(
                "No new unique listings at offset {} for '{}', treating as exhausted",
                offset,
                keyword
            );
            break;
        }

        tracing::debug!(
            "Found {} new listings for '{}' (total {})",
            new_ids.len(),
            keyword,
            ids.len() + new_ids.len()
        );

        ids.extend(new_ids);
        offset += PAGE_SIZE;

        tokio::time::sleep(jitter(pacing.page_delay_min_ms, pacing.page_delay_max_ms)).await;
    }

    ids.truncate(limit);
    ids
}
