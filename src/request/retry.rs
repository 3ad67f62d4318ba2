//! Exponential backoff policy applied to every request.

use std::time::Duration;

const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Controls how failed requests are retried.
///
/// A request is retried on connection errors, timeouts and on the statuses in
/// `retry_statuses`. The delay before retry `n` (starting at 1) is
/// `backoff_factor * 2^(n - 1)` seconds, capped at two minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt.
    pub retries: u32,
    /// Base backoff in seconds.
    pub backoff_factor: f64,
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 5,
            backoff_factor: 0.2,
            retry_statuses: vec![500, 502, 504],
        }
    }
}

impl RetryPolicy {
    /// A policy that makes a single attempt.
    pub fn none() -> Self {
        Self {
            retries: 0,
            ..Default::default()
        }
    }

    /// Delay to wait before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        if retry == 0 || self.backoff_factor <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = (retry - 1).min(30) as i32;
        let seconds = self.backoff_factor * 2f64.powi(exponent);
        Duration::try_from_secs_f64(seconds)
            .unwrap_or(MAX_BACKOFF)
            .min(MAX_BACKOFF)
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backoff_sequence() {
        let policy = RetryPolicy::default();
        let delays: Vec<u128> = (1..=5).map(|n| policy.backoff(n).as_millis()).collect();
        assert_eq!(delays, [200, 400, 800, 1600, 3200]);
        assert_eq!(policy.max_attempts(), 6);
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy {
            backoff_factor: 10.0,
            ..Default::default()
        };
        assert_eq!(policy.backoff(20), MAX_BACKOFF);
    }

    #[test]
    fn test_zero_factor() {
        let policy = RetryPolicy {
            backoff_factor: 0.0,
            ..Default::default()
        };
        assert_eq!(policy.backoff(3), Duration::ZERO);
        assert_eq!(RetryPolicy::none().max_attempts(), 1);
    }
}
