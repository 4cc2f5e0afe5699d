/*
[INPUT]:  GATEWAY_* environment variables
[OUTPUT]: Wallet identity and a JWT from the Gateway API
[POS]:    Examples - wallet authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use gateway_sdk::*;

/// Example: Authentication flow
///
/// Set `GATEWAY_PRIVATE_KEY` and `GATEWAY_WALLET_TYPE` (ethereum, solana or sui),
/// optionally `GATEWAY_URL`, then run:
///
/// ```text
/// cargo run -p gateway-sdk --example auth_example
/// ```
#[tokio::main]
async fn main() {
    println!("=== Gateway Authentication Example ===\n");

    let config = match SdkConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read configuration: {}", e);
            return;
        }
    };

    let sdk = match GatewaySdk::new(config) {
        Ok(sdk) => sdk,
        Err(e) => {
            eprintln!("Failed to create SDK: {}", e);
            return;
        }
    };
    println!("✓ SDK created for {}", sdk.client().base_url());

    let Some(wallet) = sdk.wallet() else {
        println!("Using API key authentication, no wallet login needed");
        return;
    };
    println!("  Wallet: {} ({})", wallet.address(), wallet.wallet_type());

    match sdk.auth().issue_token(wallet).await {
        Ok(token) => println!("✓ Token issued: {}...", &token[..token.len().min(16)]),
        Err(e) => eprintln!("Login failed: {}", e),
    }

    println!("\n✓ Authentication example complete");
}
