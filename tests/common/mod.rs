//! Common test utilities for saasstart-gateway
//!
//! Shared test infrastructure: configuration factories and payment-provider
//! mock helpers.

pub mod fixtures;

pub use fixtures::{ConfigFactory, mock_session_body};
