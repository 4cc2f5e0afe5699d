/*
[INPUT]:  Mock auth endpoints and protected routes
[OUTPUT]: Test results for wallet login and token re-authentication
[POS]:    Integration tests - authentication
[UPDATE]: When auth endpoints or middleware rules change
*/

mod common;

use common::{
    ETH_PRIVATE_KEY, LOGIN_MESSAGE, SOLANA_ADDRESS, SOLANA_PRIVATE_KEY, SUI_PRIVATE_KEY,
    expired_jwt, mount_login_flow, setup_mock_server, valid_jwt,
};
use gateway_sdk::{GatewayError, GatewaySdk, SdkConfig, WalletType};
use reqwest::Method;
use rstest::rstest;
use tokio_test::assert_ok;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn wallet_sdk(server: &MockServer, private_key: &str, wallet_type: WalletType) -> GatewaySdk {
    assert_ok!(GatewaySdk::new(
        SdkConfig::with_wallet(private_key, wallet_type).url(server.uri())
    ))
}

async fn mount_protected(server: &MockServer, token: &str, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(calls)
        .mount(server)
        .await;
}

async fn get_users(sdk: &GatewaySdk) -> gateway_sdk::Result<serde_json::Value> {
    sdk.client().get("/users").await
}

#[rstest]
#[case::ethereum(ETH_PRIVATE_KEY, WalletType::Ethereum)]
#[case::solana(SOLANA_PRIVATE_KEY, WalletType::Solana)]
#[tokio::test]
async fn test_request_without_token_logs_in_once(
    #[case] private_key: &str,
    #[case] wallet_type: WalletType,
) {
    let server = setup_mock_server().await;
    let token = valid_jwt();
    mount_login_flow(&server, &token, 1).await;
    mount_protected(&server, &token, 1).await;

    let sdk = wallet_sdk(&server, private_key, wallet_type);
    let body = assert_ok!(get_users(&sdk).await);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_login_body_carries_wallet_address() {
    let server = setup_mock_server().await;
    let token = valid_jwt();

    Mock::given(method("GET"))
        .and(path("/auth/message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": LOGIN_MESSAGE})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_partial_json(serde_json::json!({
            "message": LOGIN_MESSAGE,
            "wallet_address": SOLANA_ADDRESS,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": token})))
        .expect(1)
        .mount(&server)
        .await;
    mount_protected(&server, &token, 1).await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    assert_ok!(get_users(&sdk).await);
}

#[tokio::test]
async fn test_valid_token_skips_login() {
    let server = setup_mock_server().await;
    let caller_token = valid_jwt();
    mount_login_flow(&server, "unused", 0).await;
    mount_protected(&server, &caller_token, 1).await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    let builder = assert_ok!(sdk.client().request(Method::GET, "/users")).bearer_auth(&caller_token);
    let body: serde_json::Value = assert_ok!(sdk.client().send_json("/users", builder).await);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_expired_token_is_replaced() {
    let server = setup_mock_server().await;
    let fresh = valid_jwt();
    mount_login_flow(&server, &fresh, 1).await;
    mount_protected(&server, &fresh, 1).await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    let builder = assert_ok!(sdk.client().request(Method::GET, "/users")).bearer_auth(expired_jwt());
    let _: serde_json::Value = assert_ok!(sdk.client().send_json("/users", builder).await);
}

#[tokio::test]
async fn test_issued_token_is_reused() {
    let server = setup_mock_server().await;
    let token = valid_jwt();
    mount_login_flow(&server, &token, 1).await;
    mount_protected(&server, &token, 3).await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    for _ in 0..3 {
        assert_ok!(get_users(&sdk).await);
    }
}

#[tokio::test]
async fn test_concurrent_requests_share_one_login() {
    let server = setup_mock_server().await;
    let token = valid_jwt();
    mount_login_flow(&server, &token, 1).await;
    mount_protected(&server, &token, 8).await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sdk = sdk.clone();
            tokio::spawn(async move { get_users(&sdk).await })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }
}

#[tokio::test]
async fn test_auth_routes_do_not_trigger_login() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/auth/message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": LOGIN_MESSAGE})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    let message = assert_ok!(sdk.auth().get_message().await);
    assert_eq!(message, LOGIN_MESSAGE);
}

#[tokio::test]
async fn test_login_failure_aborts_request() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/auth/message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": LOGIN_MESSAGE})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "login unavailable"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    let err = get_users(&sdk).await.unwrap_err();

    match err {
        GatewayError::TokenIssue(source) => {
            assert!(matches!(*source, GatewayError::Api { code: 500, .. }));
        }
        other => panic!("expected token issue error, got {other:?}"),
    }
}

/// Derived Sui addresses are 32 bytes, which address sniffing at login rejects,
/// so a Sui wallet cannot obtain a token through the middleware.
#[tokio::test]
async fn test_sui_wallet_login_rejected_by_address_detection() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/auth/message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": LOGIN_MESSAGE})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sdk = wallet_sdk(&server, SUI_PRIVATE_KEY, WalletType::Sui);
    let err = get_users(&sdk).await.unwrap_err();

    let GatewayError::TokenIssue(source) = err else {
        panic!("expected token issue error");
    };
    assert!(source.to_string().contains("unsupported wallet address"));
}

#[tokio::test]
async fn test_api_key_skips_wallet_flow() {
    let server = setup_mock_server().await;
    mount_login_flow(&server, "unused", 0).await;
    mount_protected(&server, "static-key", 1).await;

    let mut config = SdkConfig::with_wallet(SOLANA_PRIVATE_KEY, WalletType::Solana).url(server.uri());
    config.api_key = Some("static-key".to_string());
    let sdk = assert_ok!(GatewaySdk::new(config));

    assert_ok!(get_users(&sdk).await);
}

#[tokio::test]
async fn test_refresh_token_endpoint() {
    let server = setup_mock_server().await;
    let old = valid_jwt();
    Mock::given(method("GET"))
        .and(path("/auth/refresh-token"))
        .and(header("authorization", format!("Bearer {old}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "refreshed"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_login_flow(&server, "unused", 0).await;

    let sdk = wallet_sdk(&server, SOLANA_PRIVATE_KEY, WalletType::Solana);
    let token = assert_ok!(sdk.auth().refresh_token(&old).await);
    assert_eq!(token, "refreshed");
}
