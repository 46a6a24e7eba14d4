//! vo-admin: operator CLI for a containerized validator node.
//!
//! Wires the container-exec and HTTP adapters into the genesis-sync and
//! lifecycle subsystems and runs one operation per invocation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vo_admin::ContainerExecutor;
use vo_genesis_sync::{GenesisSyncConfig, GenesisSyncService, ReqwestFetcher};
use vo_lifecycle::{LifecycleConfig, ValidatorLifecycle};
use vo_tx_pipeline::PipelineConfig;

/// Operator CLI for a containerized validator node.
#[derive(Parser, Debug)]
#[command(name = "vo-admin")]
#[command(about = "Join, inspect, and drive a containerized validator")]
struct Args {
    /// Container runtime binary (docker, podman)
    #[arg(long, default_value = "docker")]
    runtime: String,

    /// Container the daemon runs in
    #[arg(long, default_value = "validator")]
    container: String,

    /// Daemon CLI binary name inside the container
    #[arg(long, default_value = "chaind")]
    daemon: String,

    /// Chain identifier for transactions
    #[arg(long, default_value = "localnet-1")]
    chain_id: String,

    /// Keyring name of the validator account
    #[arg(long, default_value = "validator")]
    key_name: String,

    /// Keyring backend
    #[arg(long, default_value = "test")]
    keyring_backend: String,

    /// Daemon home directory inside the container
    #[arg(long, default_value = "/home/validator/.chaind")]
    home: String,

    /// Static transaction fee
    #[arg(long, default_value = "100uvo")]
    fees: String,

    /// Static gas limit
    #[arg(long, default_value_t = 1_000_000)]
    gas: u64,

    /// Expected inter-block time in seconds
    #[arg(long, default_value_t = 10)]
    block_interval: u64,

    /// Confirmation grace period in seconds
    #[arg(long, default_value_t = 5)]
    confirm_grace: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Acquire and verify the genesis document from a seed node
    Join {
        /// Seed host address
        #[arg(long)]
        host: String,

        /// Query-relay port on the seed host
        #[arg(long, default_value_t = 11000)]
        relay_port: u16,

        /// Consensus RPC port on the seed host
        #[arg(long, default_value_t = 26657)]
        rpc_port: u16,

        /// Where to write the verified document
        #[arg(long, default_value = "genesis.json")]
        out: PathBuf,
    },

    /// Show validator status, rank, and streak
    Status,

    /// Pause an active validator
    Pause,

    /// Unpause a paused validator
    Unpause,

    /// Activate an inactive validator
    Activate,
}

impl Args {
    fn lifecycle_config(&self) -> LifecycleConfig {
        LifecycleConfig {
            pipeline: PipelineConfig {
                context: self.container.clone(),
                daemon: self.daemon.clone(),
                block_interval_secs: self.block_interval,
                confirm_grace_secs: self.confirm_grace,
                ..PipelineConfig::default()
            },
            key_name: self.key_name.clone(),
            chain_id: self.chain_id.clone(),
            keyring_backend: self.keyring_backend.clone(),
            home: self.home.clone(),
            fees: self.fees.clone(),
            gas: self.gas,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Ctrl-C cancels whatever operation is in flight; blocking waits
    // observe the token within one poll tick.
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling");
            trigger.cancel();
        }
    });

    match &args.command {
        Command::Join {
            host,
            relay_port,
            rpc_port,
            out,
        } => {
            let config = GenesisSyncConfig::new(host.clone(), *relay_port, *rpc_port);
            let fetcher = ReqwestFetcher::new(
                Duration::from_secs(config.request_timeout_secs),
                Duration::from_secs(config.connect_timeout_secs),
            )
            .context("building HTTP client")?;
            let service = GenesisSyncService::new(config, fetcher);

            let document = service
                .acquire(&cancel)
                .await
                .context("genesis acquisition failed")?;
            tokio::fs::write(out, document.as_bytes())
                .await
                .with_context(|| format!("writing {}", out.display()))?;
            info!(
                path = %out.display(),
                bytes = document.len(),
                "verified genesis written"
            );
        }

        command => {
            let executor = Arc::new(ContainerExecutor::new(args.runtime.clone()));
            let lifecycle = ValidatorLifecycle::new(executor, args.lifecycle_config());

            match command {
                Command::Status => {
                    let info = lifecycle.status().await.context("status query failed")?;
                    println!(
                        "address={} status={} rank={} streak={}",
                        info.address, info.state, info.rank, info.streak
                    );
                }
                Command::Pause => {
                    lifecycle.pause(&cancel).await.context("pause failed")?;
                    println!("validator paused");
                }
                Command::Unpause => {
                    lifecycle.unpause(&cancel).await.context("unpause failed")?;
                    println!("validator unpaused");
                }
                Command::Activate => {
                    lifecycle.activate(&cancel).await.context("activate failed")?;
                    println!("validator activated");
                }
                Command::Join { .. } => unreachable!("handled above"),
            }
        }
    }

    Ok(())
}
