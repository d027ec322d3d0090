//! Fixed-Window Rate Limiting
//!
//! Tracks a request count per token within a fixed time window and rejects
//! requests once a caller-supplied limit is exceeded within that window.

mod limiter;
mod types;
mod utils;


// Re-export public types
pub use limiter::RateLimiter;
pub use types::{RateLimitExceeded, RateLimitStatus};
