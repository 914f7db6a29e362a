//! HTTP fetcher implementation
//!
//! This module issues the pipeline's outbound requests:
//! - Building an HTTP client with browser-mimicking headers
//! - A single GET with query parameters, returning status and body
//! - Transport error classification
//!
//! The fetcher never retries; callers own the retry policy.

use crate::config::FetcherConfig;
use crate::{ConfigError, HarvestError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Response of a completed fetch: any HTTP status with its body
///
/// Non-success statuses are data, not errors; only transport-level failures
/// (DNS, timeout, connection reset, body read) surface as `Err`.
#[derive(Debug)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

impl FetchedPage {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Builds an HTTP client with browser-mimicking configuration
///
/// The guest endpoints serve empty shells or 999-style blocks to obvious
/// bots, so the client presents a desktop-browser identity and the fixed
/// connect/read timeouts from the fetcher config.
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(HarvestError)` - Invalid header value or client build failure
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, HarvestError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, parse_header_value("accept", &config.accept)?);
    headers.insert(
        ACCEPT_LANGUAGE,
        parse_header_value("accept-language", &config.accept_language)?,
    );

    let client = Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, HarvestError> {
    HeaderValue::from_str(value).map_err(|e| {
        HarvestError::Config(ConfigError::Validation(format!(
            "invalid {} header value: {}",
            name, e
        )))
    })
}

/// Fetches a single URL with optional query parameters
///
/// Returns the response status and body for every completed HTTP exchange,
/// including 4xx/5xx. Transport failures are surfaced as
/// `HarvestError::Transport` carrying the request URL.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `params` - Query parameters appended to the URL
pub async fn fetch_page(
    client: &Client,
    url: &str,
    params: &[(&str, &str)],
) -> Result<FetchedPage, HarvestError> {
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|source| HarvestError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| HarvestError::Transport {
            url: url.to_string(),
            source,
        })?;

    Ok(FetchedPage { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = FetcherConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_rejects_bad_header() {
        let config = FetcherConfig {
            accept: "text/html\nX-Sneaky: yes".to_string(),
            ..FetcherConfig::default()
        };
        let result = build_http_client(&config);
        assert!(matches!(result, Err(HarvestError::Config(_))));
    }

    #[test]
    fn test_fetched_page_success_flag() {
        let ok = FetchedPage {
            status: StatusCode::OK,
            body: String::new(),
        };
        let blocked = FetchedPage {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!blocked.is_success());
    }

    // Network behavior is exercised with wiremock in the integration tests
}
