//! Payment-provider HTTP client

use super::error::PaymentError;
use super::models::{CheckoutSessionParams, PortalSessionParams, Session};
use crate::config::models::billing::BillingConfig;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Thin client for the payment provider's session APIs
pub struct PaymentClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

impl PaymentClient {
    /// Create a client from billing configuration
    pub fn new(config: &BillingConfig) -> Result<Self, PaymentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        })
    }

    /// Create a checkout session for a subscription purchase
    pub async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<Session, PaymentError> {
        debug!(customer = %params.customer, price = %params.price, "Creating checkout session");
        self.post_session("/v1/checkout/sessions", params).await
    }

    /// Create a billing portal session for subscription self-management
    pub async fn create_portal_session(
        &self,
        params: &PortalSessionParams,
    ) -> Result<Session, PaymentError> {
        debug!(customer = %params.customer, "Creating portal session");
        self.post_session("/v1/portal/sessions", params).await
    }

    async fn post_session<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Session, PaymentError> {
        let url = format!("{}{}", self.api_base, path);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(status = %status, path = path, "Payment API request failed");
            return Err(PaymentError::from_error_body(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| PaymentError::Parse(e.to_string()))
    }
}
