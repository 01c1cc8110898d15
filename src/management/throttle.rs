use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Longest `Retry-After` we are willing to honour.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(120);

/// Allows one request per `interval`, with no burst.
///
/// The first request passes immediately. A zero interval disables pacing
/// altogether.
pub struct RateLimiter {
    interval: Duration,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            limiter: Quota::with_period(interval).map(governor::RateLimiter::direct),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until the next request may be sent.
    pub async fn until_ready(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

/// Bounded retry for `503 Service Unavailable` responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, the first one included.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Delay before the next attempt: the server's hint when it asks for
    /// longer than our own delay, capped at [`MAX_RETRY_AFTER`].
    pub fn delay_for(&self, retry_after: Option<Duration>) -> Duration {
        match retry_after {
            Some(hint) => hint.min(MAX_RETRY_AFTER).max(self.delay),
            None => self.delay,
        }
    }
}

/// Reads a `Retry-After` header given in seconds.
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
