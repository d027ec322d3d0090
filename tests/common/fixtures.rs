//! Test fixtures and factories

use saasstart_gateway::Config;

/// Factory for gateway configurations pointed at a test provider
pub struct ConfigFactory;

impl ConfigFactory {
    /// A config with a short window and small limits, pointed at `api_base`
    pub fn for_provider(api_base: &str) -> Config {
        let mut config = Config::default();
        config.gateway.billing.api_base = api_base.to_string();
        config.gateway.billing.secret_key = "sk_test_fixture".to_string();
        config.gateway.billing.return_url_base = "http://localhost:3000".to_string();
        config.gateway.rate_limit.window_ms = 60_000;
        config
    }

    /// Same as `for_provider` but with explicit per-route limits
    pub fn with_limits(api_base: &str, checkout_limit: u32, portal_limit: u32) -> Config {
        let mut config = Self::for_provider(api_base);
        config.gateway.billing.checkout_limit = checkout_limit;
        config.gateway.billing.portal_limit = portal_limit;
        config
    }
}

/// A provider session response body
pub fn mock_session_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "url": format!("https://pay.example.com/{}", id),
    })
}
