//! Billing configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Payment-provider and billing route configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Base URL of the payment provider's API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Secret key for the payment provider
    ///
    /// Left out of the YAML in practice; filled from the PAYMENT_SECRET_KEY
    /// environment variable (a `.env` file is honored).
    #[serde(default)]
    pub secret_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Base URL of the frontend, used to build redirect URLs
    #[serde(default = "default_return_url_base")]
    pub return_url_base: String,
    /// Max checkout-session creations per rate limit window
    #[serde(default = "default_checkout_limit")]
    pub checkout_limit: u32,
    /// Max portal-session creations per rate limit window
    #[serde(default = "default_portal_limit")]
    pub portal_limit: u32,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            secret_key: String::new(),
            timeout: default_timeout(),
            return_url_base: default_return_url_base(),
            checkout_limit: default_checkout_limit(),
            portal_limit: default_portal_limit(),
        }
    }
}

impl BillingConfig {
    /// Merge billing configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.api_base != default_api_base() {
            self.api_base = other.api_base;
        }
        if !other.secret_key.is_empty() {
            self.secret_key = other.secret_key;
        }
        if other.timeout != default_timeout() {
            self.timeout = other.timeout;
        }
        if other.return_url_base != default_return_url_base() {
            self.return_url_base = other.return_url_base;
        }
        if other.checkout_limit != default_checkout_limit() {
            self.checkout_limit = other.checkout_limit;
        }
        if other.portal_limit != default_portal_limit() {
            self.portal_limit = other.portal_limit;
        }
        self
    }

    /// Fill the secret key from the environment if the file left it empty
    pub fn apply_env(&mut self) {
        if self.secret_key.is_empty() {
            if let Ok(key) = std::env::var("PAYMENT_SECRET_KEY") {
                self.secret_key = key;
            }
        }
        if let Ok(api_base) = std::env::var("PAYMENT_API_BASE") {
            self.api_base = api_base;
        }
    }

    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base.is_empty() {
            return Err("Payment API base URL is required".to_string());
        }
        if self.return_url_base.is_empty() {
            return Err("Return URL base is required".to_string());
        }
        if self.timeout == 0 {
            return Err("Billing timeout cannot be 0".to_string());
        }
        if self.checkout_limit == 0 || self.portal_limit == 0 {
            return Err("Billing rate limits must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_api_base() -> String {
    "https://api.payments.example.com".to_string()
}

fn default_return_url_base() -> String {
    "http://localhost:3000".to_string()
}
