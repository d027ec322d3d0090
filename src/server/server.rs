//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::billing::PaymentClient;
use crate::core::rate_limiter::RateLimiter;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let limiter = Arc::new(RateLimiter::new(config.rate_limit()));

        let sweep_interval = config.rate_limit().sweep_interval_secs;
        if sweep_interval > 0 {
            info!(interval_secs = sweep_interval, "Starting rate limit sweeper");
            limiter.clone().start_sweeper_task(sweep_interval);
        }

        if config.billing().secret_key.is_empty() {
            warn!("Payment secret key is not set, provider calls will be rejected upstream");
        }

        let payments = PaymentClient::new(config.billing())
            .map_err(|e| GatewayError::Config(format!("Failed to build payment client: {}", e)))?;

        let state = AppState::new(config.clone(), limiter, payments);

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = Self::build_cors(&state.config.server().cors);

        App::new()
            .app_data(state)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "SaaSStart-Gateway")))
            .configure(routes::health::configure_routes)
            .configure(routes::billing::configure_routes)
    }

    /// Build CORS middleware from configuration
    fn build_cors(cors_config: &crate::config::CorsConfig) -> Cors {
        let mut cors = Cors::default();

        if !cors_config.enabled {
            return cors;
        }

        if cors_config.allows_all_origins() {
            cors = cors.allow_any_origin();
            cors_config.validate().unwrap_or_else(|e| {
                warn!(error = %e, "CORS configuration warning");
            });
        } else {
            for origin in &cors_config.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        let methods: Vec<actix_web::http::Method> = cors_config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        if !methods.is_empty() {
            cors = cors.allowed_methods(methods);
        }

        let headers: Vec<actix_web::http::header::HeaderName> = cors_config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        if !headers.is_empty() {
            cors = cors.allowed_headers(headers);
        }

        cors = cors.max_age(cors_config.max_age as usize);

        if cors_config.allow_credentials {
            cors = cors.supports_credentials();
        }

        cors
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| {
                GatewayError::Config(format!("Failed to bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
