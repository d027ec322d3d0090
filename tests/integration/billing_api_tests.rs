//! Billing endpoint tests
//!
//! Runs the actix application against a wiremock stand-in for the payment
//! provider.

use crate::common::{ConfigFactory, mock_session_body};
use actix_web::{test, web};
use saasstart_gateway::Config;
use saasstart_gateway::core::billing::PaymentClient;
use saasstart_gateway::core::rate_limiter::RateLimiter;
use saasstart_gateway::server::server::HttpServer;
use saasstart_gateway::server::state::AppState;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_state(config: Config) -> web::Data<AppState> {
    let limiter = Arc::new(RateLimiter::new(config.rate_limit()));
    let payments = PaymentClient::new(config.billing()).unwrap();
    web::Data::new(AppState::new(config, limiter, payments))
}

#[actix_web::test]
async fn test_checkout_session_pass_through() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .and(header("Authorization", "Bearer sk_test_fixture"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_session_body("cs_123")))
        .expect(1)
        .mount(&provider)
        .await;

    let state = app_state(ConfigFactory::for_provider(&provider.uri()));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/billing/checkout-session")
        .set_json(serde_json::json!({
            "price_id": "price_pro",
            "customer_id": "cus_42",
        }))
        .to_request();

    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["id"], "cs_123");
    assert_eq!(resp["data"]["url"], "https://pay.example.com/cs_123");
}

#[actix_web::test]
async fn test_portal_session_pass_through() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/portal/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_session_body("ps_9")))
        .expect(1)
        .mount(&provider)
        .await;

    let state = app_state(ConfigFactory::for_provider(&provider.uri()));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/billing/portal-session")
        .set_json(serde_json::json!({ "customer_id": "cus_42" }))
        .to_request();

    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["id"], "ps_9");
}

#[actix_web::test]
async fn test_checkout_validation_rejects_empty_fields() {
    let provider = MockServer::start().await;
    let state = app_state(ConfigFactory::for_provider(&provider.uri()));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/billing/checkout-session")
        .set_json(serde_json::json!({
            "price_id": "",
            "customer_id": "cus_42",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_checkout_rate_limited_after_limit() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_session_body("cs_ok")))
        .expect(2)
        .mount(&provider)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/portal/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_session_body("ps_ok")))
        .expect(1)
        .mount(&provider)
        .await;

    let state = app_state(ConfigFactory::with_limits(&provider.uri(), 2, 5));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let checkout_body = serde_json::json!({
        "price_id": "price_pro",
        "customer_id": "cus_42",
    });

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/billing/checkout-session")
            .set_json(&checkout_body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    // Third call within the window is rejected before the provider is called
    let req = test::TestRequest::post()
        .uri("/api/billing/checkout-session")
        .set_json(&checkout_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);
    assert!(resp.headers().contains_key("Retry-After"));

    // The portal route has its own token, so it is unaffected
    let req = test::TestRequest::post()
        .uri("/api/billing/portal-session")
        .set_json(serde_json::json!({ "customer_id": "cus_42" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_provider_failure_maps_to_bad_gateway() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&provider)
        .await;

    let state = app_state(ConfigFactory::for_provider(&provider.uri()));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/billing/checkout-session")
        .set_json(serde_json::json!({
            "price_id": "price_pro",
            "customer_id": "cus_42",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);
}

#[actix_web::test]
async fn test_provider_client_error_relayed_as_bad_request() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/portal/sessions"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": {"message": "No such customer"}})),
        )
        .mount(&provider)
        .await;

    let state = app_state(ConfigFactory::for_provider(&provider.uri()));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/billing/portal-session")
        .set_json(serde_json::json!({ "customer_id": "cus_missing" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let provider = MockServer::start().await;
    let state = app_state(ConfigFactory::for_provider(&provider.uri()));
    let app = test::init_service(HttpServer::create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["status"], "healthy");
}
