//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Fixed window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Expected number of distinct tokens
    ///
    /// Only pre-sizes the limiter's map. Not a capacity bound; exceeding it
    /// has no effect on limiting.
    #[serde(default = "default_unique_tokens")]
    pub unique_tokens: usize,
    /// Interval between background sweeps of expired entries, in seconds
    ///
    /// 0 disables the sweeper; entries then persist for the life of the
    /// process, one per distinct token ever seen.
    #[serde(default)]
    pub sweep_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            unique_tokens: default_unique_tokens(),
            sweep_interval_secs: 0,
        }
    }
}

impl RateLimitConfig {
    /// Merge rate limit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.window_ms != default_window_ms() {
            self.window_ms = other.window_ms;
        }
        if other.unique_tokens != default_unique_tokens() {
            self.unique_tokens = other.unique_tokens;
        }
        if other.sweep_interval_secs != 0 {
            self.sweep_interval_secs = other.sweep_interval_secs;
        }
        self
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_ms == 0 {
            return Err("Rate limit window cannot be 0".to_string());
        }
        Ok(())
    }
}
