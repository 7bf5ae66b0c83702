//! Reconnect retry policy.
//!
//! The transport retries unconditionally with a fixed delay and no
//! attempt cap: a dashboard should keep trying to come back up for as
//! long as it is open. The policy lives here, owned by the transport and
//! decoupled from the aggregation core.

use std::time::Duration;

/// Fixed-backoff retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    delay: Duration,
}

impl RetryPolicy {
    /// Policy with the given fixed delay between attempts.
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    /// Delay before the given attempt. Constant for every attempt; the
    /// attempt number is accepted for parity with shaped backoff
    /// policies.
    pub fn delay_for(&self, _attempt: u32) -> Duration {
        self.delay
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    /// Reconnect after 3 seconds.
    fn default() -> Self {
        Self::fixed(Duration::from_secs(3))
    }
}
