//! Rate limiter types and data structures

use std::time::{Duration, Instant};
use thiserror::Error;

/// Rejection produced when a token's count has reached its limit within the
/// active window
///
/// Recoverable by the caller; HTTP handlers map it to a 429 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("rate limit exceeded for token '{token}': {limit} requests per window")]
pub struct RateLimitExceeded {
    /// Token whose counter is exhausted
    pub token: String,
    /// Limit that was in force for the rejected call
    pub limit: u32,
    /// Time remaining until the token's window expires
    pub retry_after: Duration,
}

impl RateLimitExceeded {
    /// Retry-After value in whole seconds, rounded up so clients never retry
    /// inside the still-active window
    pub fn retry_after_secs(&self) -> u64 {
        let secs = self.retry_after.as_secs();
        if self.retry_after.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs.max(1)
        }
    }
}

/// Snapshot of a token's counter, for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct RateLimitStatus {
    /// Accepted requests observed in the current window
    pub count: u32,
    /// Time remaining until the window expires (zero if already expired)
    pub reset_after: Duration,
}

/// Per-token counter state
///
/// Created lazily on first observation of a token, mutated in place on every
/// subsequent check, never implicitly deleted.
#[derive(Debug, Clone)]
pub(super) struct TokenState {
    /// Accepted requests observed in the current window
    pub(super) count: u32,
    /// When the current window began (monotonic, only moves forward)
    pub(super) window_start: Instant,
}
