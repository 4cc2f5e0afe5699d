/*
[INPUT]:  CLI arguments, optional YAML configuration file, GATEWAY_* environment
[OUTPUT]: Wallet address, signatures, verification results or a login token on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or subcommands
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gateway_sdk::WalletType;
use gateway_wallet_cli::{CredentialArgs, commands, load_config};

#[derive(Parser, Debug)]
#[command(name = "gateway-wallet", version, about = "Gateway multi-chain wallet tool")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[command(flatten)]
    credentials: CredentialArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the address derived from the private key
    Address,
    /// Sign a message with the configured wallet
    Sign {
        #[arg(long)]
        message: String,
    },
    /// Verify a signature; the chain is detected from the address unless given
    Verify {
        #[arg(long)]
        message: String,
        #[arg(long)]
        signature: String,
        #[arg(long)]
        address: String,
        #[arg(long = "chain")]
        chain: Option<WalletType>,
    },
    /// Log in with the wallet and print the issued JWT; skipped when an API key is set
    Login,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_deref(), &args.credentials)?;

    match args.command {
        Command::Address => {
            let identity = commands::address(&config)?;
            print_json(&identity)?;
        }
        Command::Sign { message } => {
            let signed = commands::sign(&config, &message)?;
            print_json(&signed)?;
        }
        Command::Verify {
            message,
            signature,
            address,
            chain,
        } => {
            let wallet_type = commands::verify(&message, &signature, &address, chain)?;
            info!(wallet_type = %wallet_type, "signature verified");
            println!("valid {wallet_type} signature");
        }
        Command::Login => {
            match commands::login(config).await? {
                Some(token) => println!("{token}"),
                None => println!("API key configured, no login needed"),
            }
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
