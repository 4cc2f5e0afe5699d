/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gateway-sdk tests

#![allow(dead_code)]

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Hardhat account #0
pub const ETH_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const ETH_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

pub const SOLANA_PRIVATE_KEY: &str =
    "T8HMDTLmyQgY6VjvLdEwSSZsexAtiFvfiKBzEsT3ajNQg7jJgnTBK2qDSShz98ND3ihtrwrQcUWokdQr4ozPQt3";
pub const SOLANA_ADDRESS: &str = "AqzrrxaBCXRsq2BaY32djAp38B42asRRahbsYvD5uvSF";

/// Ed25519 seed of all 7s
pub const SUI_PRIVATE_KEY: &str =
    "suiprivkey1qqrswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswxzszc4";
pub const SUI_ADDRESS: &str = "0xa0ccc8bcc83f6c628340134f8546a21e0618fd1aaa02432bba454c4a2c2233da";

pub const LOGIN_MESSAGE: &str = "Sign in to Gateway: nonce 7f3a";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Unsigned JWT whose `exp` is `offset_secs` from now
pub fn make_test_jwt(offset_secs: i64) -> String {
    let header = serde_json::json!({"alg": "HS256", "typ": "JWT"});
    let payload = serde_json::json!({
        "exp": chrono::Utc::now().timestamp() + offset_secs,
        "sub": "gateway-test",
    });

    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
    let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());

    format!("{header_b64}.{payload_b64}.signature")
}

pub fn valid_jwt() -> String {
    make_test_jwt(3600)
}

pub fn expired_jwt() -> String {
    make_test_jwt(-3600)
}

/// Mount `/auth/message` and `/auth` expecting `calls` logins that yield `token`
pub async fn mount_login_flow(server: &MockServer, token: &str, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/auth/message"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": LOGIN_MESSAGE}))
                .set_delay(Duration::from_millis(50)),
        )
        .expect(calls)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": token})))
        .expect(calls)
        .mount(server)
        .await;
}
