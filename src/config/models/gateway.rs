//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Billing configuration
    #[serde(default)]
    pub billing: BillingConfig,
}

impl GatewayConfig {
    /// Build a configuration purely from defaults and environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        config.billing.apply_env();
        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.rate_limit = self.rate_limit.merge(other.rate_limit);
        self.billing = self.billing.merge(other.billing);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.server.cors.validate()?;
        self.rate_limit.validate()?;
        self.billing.validate()?;
        Ok(())
    }
}
