//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::billing::PaymentClient;
use crate::core::rate_limiter::RateLimiter;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across workers. The
/// rate limiter lives here as an explicit instance rather than a process
/// global, so every call site receives it by handle.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Fixed-window rate limiter guarding the billing routes
    pub limiter: Arc<RateLimiter>,
    /// Payment-provider client
    pub payments: Arc<PaymentClient>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, limiter: Arc<RateLimiter>, payments: PaymentClient) -> Self {
        Self {
            config: Arc::new(config),
            limiter,
            payments: Arc::new(payments),
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
