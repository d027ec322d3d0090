//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway.

use crate::core::billing::PaymentError;
use crate::core::rate_limiter::RateLimitExceeded;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Payment provider errors
    #[error("Payment provider error: {0}")]
    Payment(#[from] PaymentError),

    /// Rate limiting errors
    #[error("Rate limit exceeded: {0}")]
    RateLimit(#[from] RateLimitExceeded),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for GatewayError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            GatewayError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            GatewayError::Payment(payment_error) => match payment_error {
                PaymentError::Api { status, .. } if *status == 429 => (
                    actix_web::http::StatusCode::TOO_MANY_REQUESTS,
                    "PAYMENT_RATE_LIMIT",
                    payment_error.to_string(),
                ),
                PaymentError::Api { status, .. } if *status < 500 => (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "PAYMENT_ERROR",
                    payment_error.to_string(),
                ),
                _ => (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "PAYMENT_UNAVAILABLE",
                    payment_error.to_string(),
                ),
            },
            GatewayError::RateLimit(rejection) => {
                let error_response = ErrorResponse {
                    error: ErrorDetail {
                        code: "RATE_LIMIT_EXCEEDED".to_string(),
                        message: self.to_string(),
                        timestamp: chrono::Utc::now().timestamp(),
                    },
                };
                return HttpResponse::TooManyRequests()
                    .insert_header(("Retry-After", rejection.retry_after_secs().to_string()))
                    .json(error_response);
            }
            GatewayError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            GatewayError::BadRequest(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                self.to_string(),
            ),
            GatewayError::HttpClient(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "NETWORK_ERROR",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Unix timestamp of the failure
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl GatewayError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a bad request error
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an internal server error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Create a server startup error
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
