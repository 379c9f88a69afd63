//! CLI for inspecting chain parameters
//!
//! This tool allows:
//! - Dumping the full parameter set of a network
//! - Rebuilding and verifying genesis blocks
//! - Listing and querying checkpoints
//! - Computing block subsidies

use anyhow::Context;
use chain_params::{
    params, params_for, select_params, select_params_from_name, Amount, ChainParams, NetworkId,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "params-inspect")]
#[command(about = "Chain parameter inspector", long_about = None)]
struct Cli {
    /// Network name (main, test, regtest, unittest)
    #[arg(short, long, global = true, env = "CHAIN_NETWORK", default_value = "main")]
    network: String,

    /// Use the test network
    #[arg(long, global = true)]
    testnet: bool,

    /// Use the regression test network
    #[arg(long, global = true)]
    regtest: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every parameter of the selected network
    Show,

    /// Rebuild and verify the genesis block
    Genesis,

    /// List checkpoints
    Checkpoints {
        /// Only report the checkpoint at or below this height
        #[arg(long)]
        height: Option<u32>,
    },

    /// Block subsidy at a height
    Subsidy {
        /// Block height
        #[arg(long)]
        height: u32,
    },

    /// Summarise all networks
    List,
}

#[derive(Serialize)]
struct NetworkSummary {
    network: NetworkId,
    default_port: u16,
    magic: String,
    genesis_hash: String,
    checkpoints: usize,
    last_checkpoint_height: u32,
}

impl NetworkSummary {
    fn from_params(params: &ChainParams) -> Self {
        Self {
            network: params.network_id,
            default_port: params.default_port,
            magic: hex::encode(params.magic_bytes),
            genesis_hash: params.genesis_hash().to_hex(),
            checkpoints: params.checkpoints.len(),
            last_checkpoint_height: params.checkpoints.last_height(),
        }
    }
}

#[derive(Serialize)]
struct SubsidyReport {
    network: NetworkId,
    height: u32,
    subsidy: Amount,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let network = select_network(&cli)?;
    let active = params();
    info!("Inspecting {} parameters", network);

    match cli.command {
        Commands::Show => print_json(&*active, cli.pretty)?,
        Commands::Genesis => run_genesis(&active, cli.pretty)?,
        Commands::Checkpoints { height } => run_checkpoints(&active, height, cli.pretty)?,
        Commands::Subsidy { height } => {
            let report = SubsidyReport {
                network,
                height,
                subsidy: active.block_subsidy(height),
            };
            print_json(&report, cli.pretty)?;
        }
        Commands::List => {
            let summaries: Vec<NetworkSummary> = NetworkId::ALL
                .iter()
                .map(|id| NetworkSummary::from_params(&params_for(*id)))
                .collect();
            print_json(&summaries, cli.pretty)?;
        }
    }

    Ok(())
}

/// Command-line flags win over the network name
fn select_network(cli: &Cli) -> anyhow::Result<NetworkId> {
    if cli.testnet || cli.regtest {
        let network = NetworkId::from_flags(cli.regtest, cli.testnet)?;
        select_params(network);
        return Ok(network);
    }

    select_params_from_name(&cli.network)
        .with_context(|| format!("Cannot select network '{}'", cli.network))
}

fn run_genesis(active: &Arc<ChainParams>, pretty: bool) -> anyhow::Result<()> {
    let block = &active.genesis;
    info!(
        "Genesis {} (merkle root {}, nonce {})",
        block.hash, block.header.merkle_root, block.header.nonce
    );
    print_json(block, pretty)
}

fn run_checkpoints(
    active: &Arc<ChainParams>,
    height: Option<u32>,
    pretty: bool,
) -> anyhow::Result<()> {
    let data = active.checkpoints;
    match height {
        Some(height) => {
            let checkpoint = data.checkpoint_at_or_before(height)?;
            if checkpoint.height != height {
                warn!(
                    "No checkpoint at {}, nearest below is {}",
                    height, checkpoint.height
                );
            }
            print_json(checkpoint, pretty)
        }
        None => print_json(data, pretty),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
