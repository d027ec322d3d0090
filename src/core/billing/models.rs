//! Payment-provider wire models

use serde::{Deserialize, Serialize};

/// Parameters for creating a checkout session
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSessionParams {
    /// Provider-side customer identifier
    pub customer: String,
    /// Price identifier to check out
    pub price: String,
    /// Checkout mode (the platform sells subscriptions)
    pub mode: String,
    /// Where the provider redirects after a completed checkout
    pub success_url: String,
    /// Where the provider redirects after an abandoned checkout
    pub cancel_url: String,
}

/// Parameters for creating a billing portal session
#[derive(Debug, Clone, Serialize)]
pub struct PortalSessionParams {
    /// Provider-side customer identifier
    pub customer: String,
    /// Where the provider redirects when the customer leaves the portal
    pub return_url: String,
}

/// A session created by the payment provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned session identifier
    pub id: String,
    /// Hosted page URL the frontend redirects the customer to
    pub url: String,
}
