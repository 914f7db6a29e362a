//! Harvest module for job-listing acquisition
//!
//! This module contains the core pipeline logic, including:
//! - HTTP fetching with browser-like headers
//! - Listing-id discovery across paginated search results
//! - Detail resolution with bounded retries and backoff
//! - Concurrent orchestration across keywords

mod discovery;
mod extract;
mod fetcher;
mod orchestrator;
mod pacing;
mod resolver;

pub use discovery::{discover, PAGE_SIZE};
pub use extract::{extract_job_id, parse_detail_page, parse_search_page, DetailFields, SearchPage};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use orchestrator::{run_harvest, Harvester};
pub use pacing::{jitter, rate_limit_backoff, transport_cooldown};
pub use resolver::{classify_status, resolve, ResponseClass};
