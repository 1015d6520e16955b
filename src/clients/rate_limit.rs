//! Client-side request throttling.
//!
//! Every outbound request first awaits a permit from a [`RateLimiter`]. The
//! default [`SlidingWindowLimiter`] admits at most `calls` requests in any
//! window of `period`; callers over the limit are suspended (never rejected)
//! until the oldest admission in the window ages out.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

use crate::config::RateLimit;

/// Grants permission to send a request.
#[async_trait]
pub trait RateLimiter: Send + Sync + fmt::Debug {
    /// Waits until a request may be sent, then records it.
    async fn acquire(&self);
}

/// Sliding-window limiter shared by every resource of one client.
///
/// # Example
///
/// ```rust
/// use swell_api::RateLimit;
/// use swell_api::clients::{RateLimiter, SlidingWindowLimiter};
///
/// # tokio_test::block_on(async {
/// let limiter = SlidingWindowLimiter::new(RateLimit::new(2, 1.0).unwrap());
/// limiter.acquire().await;
/// limiter.acquire().await;
/// // A third acquire would now wait for about one second.
/// # });
/// ```
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    limit: RateLimit,
    admitted: Mutex<VecDeque<Instant>>,
}

// Verify SlidingWindowLimiter is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SlidingWindowLimiter>();
};

impl SlidingWindowLimiter {
    /// Creates a limiter with an empty window.
    #[must_use]
    pub fn new(limit: RateLimit) -> Self {
        let capacity = usize::try_from(limit.calls().get()).unwrap_or(usize::MAX);
        Self {
            limit,
            admitted: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
        }
    }

    /// Returns the configured limit.
    #[must_use]
    pub const fn limit(&self) -> RateLimit {
        self.limit
    }

    /// Records an admission at `now` if the window has room.
    ///
    /// # Errors
    ///
    /// Returns the time left until the oldest admission leaves the window
    /// when the window is full. Nothing is recorded in that case.
    pub fn try_acquire_at(&self, now: Instant) -> Result<(), Duration> {
        let period = self.limit.period();
        let calls = usize::try_from(self.limit.calls().get()).unwrap_or(usize::MAX);

        let mut admitted = self
            .admitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        while admitted
            .front()
            .is_some_and(|oldest| now.saturating_duration_since(*oldest) >= period)
        {
            admitted.pop_front();
        }

        if admitted.len() < calls {
            admitted.push_back(now);
            return Ok(());
        }

        let oldest = admitted.front().copied().unwrap_or(now);
        Err((oldest + period).saturating_duration_since(now))
    }

    /// Returns how many admissions are currently inside the window.
    #[must_use]
    pub fn in_window(&self) -> usize {
        let now = Instant::now();
        let period = self.limit.period();
        self.admitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|at| now.saturating_duration_since(**at) < period)
            .count()
    }
}

#[async_trait]
impl RateLimiter for SlidingWindowLimiter {
    async fn acquire(&self) {
        loop {
            // The lock is released before sleeping.
            let wait = match self.try_acquire_at(Instant::now()) {
                Ok(()) => return,
                Err(wait) => wait,
            };
            tracing::debug!(wait_ms = wait.as_millis(), "rate limit reached, waiting");
            tokio::time::sleep(wait).await;
        }
    }
}

/// A limiter that never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

#[async_trait]
impl RateLimiter for Unlimited {
    async fn acquire(&self) {}
}
