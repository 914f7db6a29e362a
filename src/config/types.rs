use serde::Deserialize;

/// Main configuration structure for jobsweep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    pub output: OutputConfig,
}

/// What to search for and where the guest endpoints live
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Keywords to harvest, one discovery run each
    pub keywords: Vec<String>,

    /// Location string passed to the search endpoint
    pub location: String,

    /// Maximum number of listings to resolve per keyword
    #[serde(rename = "max-jobs-per-keyword")]
    pub max_jobs_per_keyword: usize,

    /// Paginated search endpoint returning HTML listing fragments
    #[serde(rename = "search-url", default = "default_search_url")]
    pub search_url: String,

    /// Per-listing detail endpoint; the listing id is appended as a path segment
    #[serde(rename = "detail-url", default = "default_detail_url")]
    pub detail_url: String,

    /// Base of the public listing page, used to synthesize canonical links
    #[serde(rename = "view-url", default = "default_view_url")]
    pub view_url: String,
}

/// HTTP client identity and timeouts
///
/// The guest endpoints block obvious bots, so the defaults mimic a desktop
/// browser rather than announcing a crawler.
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(rename = "accept-language", default = "default_accept_language")]
    pub accept_language: String,

    /// Connect and read timeout, in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Delays and limits that keep the harvest under the upstream radar
#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    /// Jitter range slept between search result pages (milliseconds)
    #[serde(rename = "page-delay-min-ms", default = "default_page_delay_min_ms")]
    pub page_delay_min_ms: u64,
    #[serde(rename = "page-delay-max-ms", default = "default_page_delay_max_ms")]
    pub page_delay_max_ms: u64,

    /// Jitter range slept before every detail request, retry or not (milliseconds)
    #[serde(rename = "detail-delay-min-ms", default = "default_detail_delay_min_ms")]
    pub detail_delay_min_ms: u64,
    #[serde(rename = "detail-delay-max-ms", default = "default_detail_delay_max_ms")]
    pub detail_delay_max_ms: u64,

    /// One backoff "time unit"; 429 backoff and transport cool-down scale from it
    #[serde(rename = "backoff-unit-ms", default = "default_backoff_unit_ms")]
    pub backoff_unit_ms: u64,

    /// Attempt budget for resolving one listing
    #[serde(rename = "max-attempts", default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Concurrent detail resolutions per keyword
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Pause the collector after this many completed resolutions
    #[serde(rename = "throttle-every", default = "default_throttle_every")]
    pub throttle_every: usize,

    /// Length of that pause (milliseconds)
    #[serde(rename = "throttle-pause-ms", default = "default_throttle_pause_ms")]
    pub throttle_pause_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the persisted JSON collection, overwritten each run
    #[serde(rename = "collection-path")]
    pub collection_path: String,

    /// Path of the plain-text market summary
    #[serde(rename = "summary-path")]
    pub summary_path: String,

    /// How many records the market summary covers
    #[serde(rename = "summary-limit", default = "default_summary_limit")]
    pub summary_limit: usize,
}

fn default_search_url() -> String {
    "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search".to_string()
}

fn default_detail_url() -> String {
    "https://www.linkedin.com/jobs-guest/jobs/api/jobPosting".to_string()
}

fn default_view_url() -> String {
    "https://www.linkedin.com/jobs/view".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept() -> String {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"
        .to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page_delay_min_ms() -> u64 {
    500
}

fn default_page_delay_max_ms() -> u64 {
    1500
}

fn default_detail_delay_min_ms() -> u64 {
    1000
}

fn default_detail_delay_max_ms() -> u64 {
    6000
}

fn default_backoff_unit_ms() -> u64 {
    1000
}

fn default_max_attempts() -> u32 {
    4
}

fn default_workers() -> usize {
    5
}

fn default_throttle_every() -> usize {
    10
}

fn default_throttle_pause_ms() -> u64 {
    1000
}

fn default_summary_limit() -> usize {
    100
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            page_delay_min_ms: default_page_delay_min_ms(),
            page_delay_max_ms: default_page_delay_max_ms(),
            detail_delay_min_ms: default_detail_delay_min_ms(),
            detail_delay_max_ms: default_detail_delay_max_ms(),
            backoff_unit_ms: default_backoff_unit_ms(),
            max_attempts: default_max_attempts(),
            workers: default_workers(),
            throttle_every: default_throttle_every(),
            throttle_pause_ms: default_throttle_pause_ms(),
        }
    }
}
