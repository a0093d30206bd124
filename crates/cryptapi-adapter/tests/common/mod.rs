/*
[INPUT]:  Test configuration and mock gateway requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cryptapi-adapter tests

use std::collections::HashMap;

use cryptapi_adapter::PaymentSession;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_PAYOUT: &str = "bc1qpayout";
pub const TEST_CALLBACK: &str = "https://example.com/cb";

/// Setup a mock gateway for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Session bound to the btc ticker with no callback parameters
pub fn test_session() -> PaymentSession {
    PaymentSession::new(
        "btc",
        TEST_PAYOUT,
        TEST_CALLBACK,
        HashMap::new(),
        HashMap::new(),
    )
    .expect("valid test session")
}

/// Session carrying one callback parameter so the encoded callback URL stays
/// deterministic
#[allow(dead_code)]
pub fn test_session_with_order_param() -> PaymentSession {
    PaymentSession::new(
        "btc",
        TEST_PAYOUT,
        TEST_CALLBACK,
        HashMap::from([("order".to_string(), "42".to_string())]),
        HashMap::new(),
    )
    .expect("valid test session")
}

/// Successful create response carrying a fresh payment address
pub fn address_created_body(address_in: &str) -> Value {
    json!({
        "status": "success",
        "address_in": address_in,
        "address_out": TEST_PAYOUT,
        "callback_url": TEST_CALLBACK,
        "priority": "default",
    })
}

/// Info response for all coins with one flat coin and one nested token
#[allow(dead_code)]
pub fn info_all_coins_body() -> Value {
    json!({
        "btc": {"coin": "Bitcoin", "minimum_transaction": 8000},
        "ltc": {"coin": "Litecoin", "minimum_transaction": 400000},
        "tokens": {
            "bep20": {
                "usdt": {"coin": "Tether"},
            },
        },
        "fee_tiers": [{"from": 0, "fee": "1.0"}],
    })
}

/// Gateway error body with the conventional status/error envelope
#[allow(dead_code)]
pub fn gateway_error_body(message: &str) -> Value {
    json!({"status": "error", "error": message})
}
