//! Detail resolution with bounded retries
//!
//! Resolving one listing id is a small state machine over the attempt loop:
//! a response is classified as success, rate-limited, absent, or plainly
//! retryable, and the classification alone decides what the loop does next.
//! Classification is a pure function of the status code so the policy is
//! testable without networking.

use crate::config::{PacingConfig, SearchConfig};
use crate::harvest::extract::parse_detail_page;
use crate::harvest::fetcher::fetch_page;
use crate::harvest::pacing::{jitter, rate_limit_backoff, transport_cooldown};
use crate::records::{JobId, JobRecord};
use chrono::Utc;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// What a response status means to the retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 2xx: parse the body
    Success,

    /// 429: back off with escalating delay, then retry
    RateLimited,

    /// 404: the listing is definitively gone, stop immediately
    Absent,

    /// Anything else (5xx, 999-style blocks): retry plainly
    Retryable,
}

/// Classifies a response status for the retry loop
pub fn classify_status(status: StatusCode) -> ResponseClass {
    if status == StatusCode::TOO_MANY_REQUESTS {
        ResponseClass::RateLimited
    } else if status == StatusCode::NOT_FOUND {
        ResponseClass::Absent
    } else if status.is_success() {
        ResponseClass::Success
    } else {
        ResponseClass::Retryable
    }
}

/// Resolves one listing id into a record
///
/// # Retry policy
///
/// Up to `max_attempts` attempts. Every attempt is preceded by an
/// unconditional jittered sleep (human pacing, not backoff). Then:
///
/// | Response | Action |
/// |----------|--------|
/// | 429 | Sleep `(attempt + 2) * 2` units, retry |
/// | 404 | Return `None` immediately |
/// | Other non-2xx | Retry with no extra delay |
/// | 2xx without the entity-info anchor | Retry; `None` once attempts run out |
/// | Transport failure | Flat 2-unit cool-down, retry |
///
/// Exhausting the budget returns `None`; this function never fails loudly.
/// The returned record's `keyword` tag is left empty for the orchestrator's
/// collector to fill.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `search` - Endpoint configuration (detail and view URLs)
/// * `pacing` - Delay and attempt-budget configuration
/// * `id` - The listing id to resolve
pub async fn resolve(
    client: &Client,
    search: &SearchConfig,
    pacing: &PacingConfig,
    id: &JobId,
) -> Option<JobRecord> {
    let url = format!("{}/{}", search.detail_url.trim_end_matches('/'), id);
    let unit = Duration::from_millis(pacing.backoff_unit_ms);

    for attempt in 0..pacing.max_attempts {
        // Human pacing before every attempt, retry or not
        tokio::time::sleep(jitter(pacing.detail_delay_min_ms, pacing.detail_delay_max_ms)).await;

        let page = match fetch_page(client, &url, &[]).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    "Transport failure for {} (attempt {}/{}): {}",
                    id,
                    attempt + 1,
                    pacing.max_attempts,
                    e
                );
                tokio::time::sleep(transport_cooldown(unit)).await;
                continue;
            }
        };

        match classify_status(page.status) {
            ResponseClass::RateLimited => {
                let wait = rate_limit_backoff(attempt, unit);
                tracing::warn!("Rate limited for {}, waiting {:?}", id, wait);
                tokio::time::sleep(wait).await;
            }

            ResponseClass::Absent => {
                tracing::info!("Listing {} no longer exists", id);
                return None;
            }

            ResponseClass::Retryable => {
                tracing::warn!(
                    "Failed to fetch {}: status {} (attempt {}/{})",
                    id,
                    page.status,
                    attempt + 1,
                    pacing.max_attempts
                );
            }

            ResponseClass::Success => match parse_detail_page(&page.body) {
                Some(fields) => {
                    return Some(JobRecord {
                        id: id.clone(),
                        title: fields.title,
                        company: fields.company,
                        location: fields.location,
                        description: fields.description,
                        link: format!("{}/{}", search.view_url.trim_end_matches('/'), id),
                        scraped_at: Utc::now(),
                        keyword: String::new(),
                    });
                }
                None => {
                    // 200 with a login wall or empty shell
                    tracing::debug!(
                        "Listing {} returned 200 without content anchor (attempt {}/{})",
                        id,
                        attempt + 1,
                        pacing.max_attempts
                    );
                }
            },
        }
    }

    tracing::warn!("Exhausted {} attempts for {}", pacing.max_attempts, id);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success() {
        assert_eq!(classify_status(StatusCode::OK), ResponseClass::Success);
        assert_eq!(classify_status(StatusCode::CREATED), ResponseClass::Success);
    }

    #[test]
    fn test_classify_rate_limited() {
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            ResponseClass::RateLimited
        );
    }

    #[test]
    fn test_classify_absent() {
        assert_eq!(classify_status(StatusCode::NOT_FOUND), ResponseClass::Absent);
    }

    #[test]
    fn test_classify_retryable() {
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            ResponseClass::Retryable
        );
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY),
            ResponseClass::Retryable
        );
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN),
            ResponseClass::Retryable
        );
        // 999-style vendor blocks fall outside the named codes
        assert_eq!(
            classify_status(StatusCode::from_u16(599).unwrap()),
            ResponseClass::Retryable
        );
    }

    // The retry loop itself is exercised with wiremock in the integration
    // tests (404 short-circuit, 429 escalation, login-wall exhaustion)
}
