//! Integration tests

pub mod billing_api_tests;
pub mod config_tests;
