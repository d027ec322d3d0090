//! # SaaSStart Gateway
//!
//! Billing API gateway for the SaaSStart platform.
//!
//! The gateway exposes two pass-through endpoints that forward session
//! creation to an external payment provider, each guarded by a fixed-window
//! rate limiter. The limiter is the designed core of this crate: one counter
//! per token, a shared window length, and per-call limits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saasstart_gateway::server::builder::run_server;
//!
//! #[tokio::main]
//! async fn main() -> saasstart_gateway::Result<()> {
//!     run_server().await
//! }
//! ```
//!
//! ## Using the rate limiter directly
//!
//! ```rust
//! use saasstart_gateway::core::rate_limiter::RateLimiter;
//! use std::time::Duration;
//!
//! let limiter = RateLimiter::with_window(Duration::from_secs(60), 500);
//! assert!(limiter.check("my-route", 10).is_ok());
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export the most commonly used types
pub use config::Config;
pub use core::rate_limiter::{RateLimitExceeded, RateLimiter};
pub use utils::error::{GatewayError, Result};
