//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod billing;
pub mod gateway;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use billing::*;
pub use gateway::*;
pub use rate_limit::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default window length in milliseconds (one minute)
pub fn default_window_ms() -> u64 {
    60_000
}

/// Default unique-token pre-size hint
pub fn default_unique_tokens() -> usize {
    500
}

/// Default per-window limit for checkout session creation
pub fn default_checkout_limit() -> u32 {
    10
}

/// Default per-window limit for portal session creation
pub fn default_portal_limit() -> u32 {
    5
}
