//! Core rate limiter implementation

use super::types::{RateLimitExceeded, TokenState};
use crate::config::models::rate_limit::RateLimitConfig;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Fixed-window rate limiter
///
/// One counter per token, all counters sharing the same window length. The
/// window is not sliding: a token's counter resets completely at
/// `window_start + window`, so a burst of `limit` requests is permitted
/// immediately after reset even if a previous burst ended just before expiry.
///
/// The limiter is an explicit instance with no ambient global; the server
/// constructs one at startup and shares it through `AppState`.
pub struct RateLimiter {
    /// Window duration
    pub(super) window: Duration,
    /// Per-token state; the entry guard provides the per-token mutual
    /// exclusion that keeps check-and-increment atomic under parallel workers
    pub(super) entries: DashMap<String, TokenState>,
}

impl RateLimiter {
    /// Create a new rate limiter from configuration
    ///
    /// `unique_tokens` only pre-sizes the map. It is not a capacity bound and
    /// has no effect on limiting decisions.
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_window(Duration::from_millis(config.window_ms), config.unique_tokens)
    }

    /// Create a rate limiter with an explicit window
    pub fn with_window(window: Duration, unique_tokens: usize) -> Self {
        Self {
            window,
            entries: DashMap::with_capacity(unique_tokens),
        }
    }

    /// Check whether a request for `token` may proceed, counting it if so
    ///
    /// `limit` is per call: different call sites sharing this instance may
    /// enforce different thresholds for the same token. The expiry branch runs
    /// first, so a check against an expired window always accepts and resets
    /// the counter to 1 regardless of `limit`. Rejection leaves the token's
    /// state untouched.
    pub fn check(&self, token: &str, limit: u32) -> Result<(), RateLimitExceeded> {
        let now = Instant::now();

        let mut entry = self
            .entries
            .entry(token.to_string())
            .or_insert_with(|| TokenState {
                count: 0,
                window_start: now,
            });
        let state = entry.value_mut();

        let elapsed = now.duration_since(state.window_start);
        if elapsed > self.window {
            // Window expired, start a fresh one with this request counted
            state.count = 1;
            state.window_start = now;
            Ok(())
        } else if state.count < limit {
            state.count += 1;
            Ok(())
        } else {
            let rejection = RateLimitExceeded {
                token: token.to_string(),
                limit,
                retry_after: self.window.saturating_sub(elapsed),
            };
            debug!(
                token = token,
                limit = limit,
                count = state.count,
                "Rate limit exceeded"
            );
            Err(rejection)
        }
    }

    /// Get the configured window duration
    pub fn window(&self) -> Duration {
        self.window
    }
}
