//! tee-node: demo wiring of the simulated TEE and its REE peer.
//!
//! Generates a fresh session identity, logs the derived ledger address and
//! the public-key export, runs a sign/verify self-check, and, when an
//! endpoint is configured, queries the ledger for the identity's balance.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use url::Url;

use tee_identity::{Address, TeeIdentity, TracingObserver};
use tee_ledger::{LedgerClient, LedgerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "tee-node",
    about = "Simulated TEE identity with ledger balance lookup",
    version
)]
struct Cli {
    /// JSON-RPC endpoint of the ledger node.
    #[arg(long)]
    endpoint: Option<Url>,

    /// Contract exposing getAccountBalance(address).
    #[arg(long, requires = "endpoint")]
    contract: Option<Address>,

    /// Message signed during the self-check round-trip.
    #[arg(long, default_value = "balance-query-nonce-42")]
    message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tee_identity=debug,tee_ledger=debug".into()),
        )
        .init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    let tee = TeeIdentity::generate()
        .context("identity construction failed")?
        .with_observer(Arc::new(TracingObserver));

    info!(address = %tee.address(), "TEE identity ready");
    info!("public key export:\n{}", tee.export_public_key());

    let signature = tee.sign(cli.message.as_bytes())?;
    anyhow::ensure!(
        tee.verify(cli.message.as_bytes(), &signature),
        "self-check signature did not verify"
    );
    info!(message = %cli.message, "sign/verify round-trip ok");

    let (Some(endpoint), Some(contract)) = (cli.endpoint, cli.contract) else {
        info!("no ledger endpoint configured, skipping balance query");
        return Ok(());
    };

    let client = LedgerClient::new(LedgerConfig::new(endpoint, contract))?;
    anyhow::ensure!(
        client.is_connected().await,
        "ledger endpoint is not reachable"
    );

    let balance = client
        .get_account_balance(&tee.address())
        .await
        .context("balance query failed")?;
    info!(address = %tee.address(), %balance, "account balance");

    Ok(())
}
