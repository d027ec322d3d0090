//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting SaaSStart billing gateway");

    // Provider secret and overrides come from .env if present
    if dotenvy::dotenv().is_ok() {
        info!("Loaded environment from .env");
    }

    let config_path = "config/gateway.yaml";
    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded: {}", config_path);
            config
        }
        Err(e) => {
            info!(
                "Configuration file loading failed ({}), falling back to environment defaults",
                e
            );
            Config::from_env()?
        }
    };

    let server = HttpServer::new(&config)?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /version - Build info");
    info!("   POST /api/billing/checkout-session - Create checkout session");
    info!("   POST /api/billing/portal-session - Create portal session");

    server.start().await
}
