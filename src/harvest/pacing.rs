//! Request pacing: jittered delays and rate-limit backoff
//!
//! Fixed-interval request trains are what upstream block detection keys on,
//! so every delay in the pipeline is either jittered or escalates.

use rand::Rng;
use std::time::Duration;

/// Picks a random delay within `[min_ms, max_ms]`
///
/// A degenerate range (min >= max) collapses to `min_ms`.
pub fn jitter(min_ms: u64, max_ms: u64) -> Duration {
    if min_ms >= max_ms {
        return Duration::from_millis(min_ms);
    }
    Duration::from_millis(rand::rng().random_range(min_ms..=max_ms))
}

/// Escalating backoff after an HTTP 429, in multiples of `unit`
///
/// Attempt indexes are zero-based: attempts 0, 1, 2 back off for 4, 6 and 8
/// units respectively, so consecutive rate-limit hits wait strictly longer.
pub fn rate_limit_backoff(attempt: u32, unit: Duration) -> Duration {
    unit * ((attempt + 2) * 2)
}

/// Flat cool-down after a transport failure, in multiples of `unit`
pub fn transport_cooldown(unit: Duration) -> Duration {
    unit * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_stays_in_range() {
        for _ in 0..100 {
            let delay = jitter(500, 1500);
            assert!(delay >= Duration::from_millis(500));
            assert!(delay <= Duration::from_millis(1500));
        }
    }

    #[test]
    fn test_jitter_degenerate_range() {
        assert_eq!(jitter(200, 200), Duration::from_millis(200));
        assert_eq!(jitter(300, 100), Duration::from_millis(300));
        assert_eq!(jitter(0, 0), Duration::ZERO);
    }

    #[test]
    fn test_backoff_escalates() {
        let unit = Duration::from_secs(1);
        assert_eq!(rate_limit_backoff(0, unit), Duration::from_secs(4));
        assert_eq!(rate_limit_backoff(1, unit), Duration::from_secs(6));
        assert_eq!(rate_limit_backoff(2, unit), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_strictly_increasing() {
        let unit = Duration::from_millis(250);
        let delays: Vec<_> = (0..4).map(|a| rate_limit_backoff(a, unit)).collect();
        for pair in delays.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_transport_cooldown() {
        assert_eq!(
            transport_cooldown(Duration::from_secs(1)),
            Duration::from_secs(2)
        );
    }
}
