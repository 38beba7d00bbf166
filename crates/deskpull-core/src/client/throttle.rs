//! Rate-limit handling
//!
//! Zendesk signals throttling with a 429 status and a `Retry-After` header
//! naming the wait in seconds. The extractors ask [`throttle_delay`] whether
//! a response was throttled, suspend for the returned duration, and re-issue
//! the identical request. A missing or unparseable header falls back to one
//! second.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;

/// Wait applied when the server does not name one.
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);

/// Returns the server-directed wait iff the response was throttled.
///
/// Success and non-throttling failure statuses return `None`; the caller
/// handles those on its own terms.
pub fn throttle_delay(status: StatusCode, headers: &HeaderMap) -> Option<Duration> {
    if status != StatusCode::TOO_MANY_REQUESTS {
        return None;
    }
    Some(parse_retry_after(headers))
}

fn parse_retry_after(headers: &HeaderMap) -> Duration {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_RETRY_AFTER)
}

/// Bound on throttling retries.
///
/// The default is unbounded: a persistently throttling server stalls the run
/// rather than failing it. Tests bound the loop with [`RetryPolicy::bounded`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RetryPolicy {
    pub max_attempts: Option<usize>,
}

impl RetryPolicy {
    /// Retry throttled requests forever.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up after `max_attempts` consecutive throttled responses.
    pub fn bounded(max_attempts: usize) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Whether `attempts` consecutive throttled responses exhaust the policy.
    pub fn exhausted(&self, attempts: usize) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}
