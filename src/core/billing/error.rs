//! Payment-provider error types

use thiserror::Error;

/// Errors produced by the payment-provider client
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The provider answered with a non-success status
    #[error("payment API error ({status}): {message}")]
    Api {
        /// HTTP status returned by the provider
        status: u16,
        /// Message extracted from the provider's error body
        message: String,
    },

    /// The request never produced a response
    #[error("payment API request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a body this client cannot interpret
    #[error("failed to parse payment API response: {0}")]
    Parse(String),
}

impl PaymentError {
    /// Extract an error message from a provider error body
    ///
    /// Providers answer errors as `{"error": {"message": ...}}`; anything else
    /// falls back to the raw body.
    pub(super) fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string());

        Self::Api { status, message }
    }
}
