//! Payment-provider pass-through
//!
//! Thin client that forwards checkout-session and portal-session creation to
//! the configured payment provider and relays the response. Deliberately glue:
//! no retries, no caching, no independent design.

mod client;
mod error;
mod models;

pub use client::PaymentClient;
pub use error::PaymentError;
pub use models::{CheckoutSessionParams, PortalSessionParams, Session};
