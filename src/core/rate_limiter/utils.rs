//! Utility functions for the rate limiter

use super::limiter::RateLimiter;
use super::types::RateLimitStatus;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

impl RateLimiter {
    /// Remove entries whose window has expired
    ///
    /// Entries are never evicted on the check path, so a long-running process
    /// accumulates one entry per distinct token. Call this (or enable the
    /// background sweeper) to reclaim them.
    pub fn cleanup(&self) {
        let window = self.window;
        let before = self.entries.len();
        self.entries
            .retain(|_, state| state.window_start.elapsed() <= window);

        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed = removed, "Swept expired rate limit entries");
        }
    }

    /// Start a background task that periodically sweeps expired entries
    pub fn start_sweeper_task(self: Arc<Self>, interval_secs: u64) {
        let limiter = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            loop {
                interval.tick().await;
                limiter.cleanup();
            }
        });
    }

    /// Get the current counter snapshot for a token, if one exists
    pub fn status(&self, token: &str) -> Option<RateLimitStatus> {
        self.entries.get(token).map(|entry| RateLimitStatus {
            count: entry.count,
            reset_after: self.window.saturating_sub(entry.window_start.elapsed()),
        })
    }

    /// Number of distinct tokens currently tracked
    pub fn tracked_tokens(&self) -> usize {
        self.entries.len()
    }
}
