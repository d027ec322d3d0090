//! Configuration loading tests

use saasstart_gateway::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_full_config_round_trip() {
    let config_content = r#"
server:
  host: "127.0.0.1"
  port: 8443
  cors:
    allowed_origins:
      - "https://app.example.com"
    allow_credentials: true

rate_limit:
  window_ms: 10000
  sweep_interval_secs: 120

billing:
  api_base: "https://payments.test.local"
  return_url_base: "https://app.example.com"
  checkout_limit: 3
  portal_limit: 2
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::from_file(temp_file.path()).await.unwrap();

    assert_eq!(config.server().port, 8443);
    assert_eq!(config.server().cors.allowed_origins.len(), 1);
    assert!(config.server().cors.allow_credentials);
    assert_eq!(config.rate_limit().window_ms, 10000);
    assert_eq!(config.rate_limit().sweep_interval_secs, 120);
    assert_eq!(config.billing().checkout_limit, 3);
    assert_eq!(config.billing().portal_limit, 2);

    // Round-trip through YAML keeps the loaded values
    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("8443"));
    assert!(yaml.contains("payments.test.local"));
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let config_content = r#"
rate_limit:
  window_ms: 0
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::from_file(temp_file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_malformed_yaml_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"server: [not: a: mapping").unwrap();

    let result = Config::from_file(temp_file.path()).await;
    assert!(result.is_err());
}

#[test]
fn test_merge_precedence() {
    let base = Config::default();

    let mut overlay = Config::default();
    overlay.gateway.server.port = 9999;
    overlay.gateway.billing.checkout_limit = 1;

    let merged = base.merge(overlay);
    assert_eq!(merged.server().port, 9999);
    assert_eq!(merged.billing().checkout_limit, 1);
    // Untouched fields keep base defaults
    assert_eq!(merged.billing().portal_limit, 5);
    assert_eq!(merged.rate_limit().window_ms, 60_000);
}
