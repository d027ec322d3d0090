//! Billing endpoints
//!
//! Rate-limited pass-through handlers that forward session creation to the
//! payment provider. Each handler checks the limiter under its own token
//! before performing the privileged external call; rejection surfaces as
//! HTTP 429 through the error type.

use crate::core::billing::{CheckoutSessionParams, PortalSessionParams};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// Limiter token partitioning checkout session creation
pub const CHECKOUT_SESSION_TOKEN: &str = "create-checkout-session";

/// Limiter token partitioning portal session creation
pub const PORTAL_SESSION_TOKEN: &str = "create-portal-session";

/// Configure billing routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/billing")
            .route("/checkout-session", web::post().to(create_checkout_session))
            .route("/portal-session", web::post().to(create_portal_session)),
    );
}

/// Request body for checkout session creation
#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Price the customer is subscribing to
    pub price_id: String,
    /// Provider-side customer identifier
    pub customer_id: String,
}

/// Request body for portal session creation
#[derive(Debug, Deserialize)]
pub struct CreatePortalRequest {
    /// Provider-side customer identifier
    pub customer_id: String,
}

/// Create a checkout session for a subscription purchase
async fn create_checkout_session(
    state: web::Data<AppState>,
    body: web::Json<CreateCheckoutRequest>,
) -> Result<HttpResponse, GatewayError> {
    let billing = state.config.billing();
    state
        .limiter
        .check(CHECKOUT_SESSION_TOKEN, billing.checkout_limit)?;

    if body.price_id.is_empty() {
        return Err(GatewayError::validation("price_id is required"));
    }
    if body.customer_id.is_empty() {
        return Err(GatewayError::validation("customer_id is required"));
    }

    let params = CheckoutSessionParams {
        customer: body.customer_id.clone(),
        price: body.price_id.clone(),
        mode: "subscription".to_string(),
        success_url: format!("{}/dashboard/billing?success=true", billing.return_url_base),
        cancel_url: format!("{}/dashboard/billing?canceled=true", billing.return_url_base),
    };

    let session = state.payments.create_checkout_session(&params).await?;

    info!(session_id = %session.id, "Checkout session created");
    Ok(HttpResponse::Ok().json(ApiResponse::success(session)))
}

/// Create a billing portal session for subscription self-management
async fn create_portal_session(
    state: web::Data<AppState>,
    body: web::Json<CreatePortalRequest>,
) -> Result<HttpResponse, GatewayError> {
    let billing = state.config.billing();
    state
        .limiter
        .check(PORTAL_SESSION_TOKEN, billing.portal_limit)?;

    if body.customer_id.is_empty() {
        return Err(GatewayError::validation("customer_id is required"));
    }

    let params = PortalSessionParams {
        customer: body.customer_id.clone(),
        return_url: format!("{}/dashboard/billing", billing.return_url_base),
    };

    let session = state.payments.create_portal_session(&params).await?;

    info!(session_id = %session.id, "Portal session created");
    Ok(HttpResponse::Ok().json(ApiResponse::success(session)))
}
