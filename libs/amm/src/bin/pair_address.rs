//! Pair address lookup
//!
//! Derives the CREATE2 address of the pair contract for two tokens on a
//! configured chain and prints it to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use pair_amm::PairAddressCache;
use pair_config::PairConfig;
use pair_types::{Address, ChainId};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First token address
    #[arg(required_unless_present = "dump_config")]
    token_a: Option<Address>,

    /// Second token address
    #[arg(required_unless_present = "dump_config")]
    token_b: Option<Address>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chain to derive on (defaults to the configured default chain)
    #[arg(long)]
    chain_id: Option<u64>,

    /// Log level override (otherwise RUST_LOG, then the configured level)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = PairConfig::load(args.config.as_deref())?;

    let filter = match &args.log_level {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level '{}'", level))?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.global.log_level.as_str().into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let (token_a, token_b) = args
        .token_a
        .zip(args.token_b)
        .context("Two token addresses are required")?;

    let chain_id = args
        .chain_id
        .map(ChainId)
        .unwrap_or_else(|| config.default_chain_id());
    let deployment = config
        .deployment(chain_id)
        .with_context(|| format!("Cannot derive pair addresses on chain {}", chain_id))?;
    debug!(
        factory = %deployment.factory,
        init_code_hash = %hex::encode(deployment.init_code_hash),
        "Resolved deployment"
    );

    let cache = PairAddressCache::new(deployment);
    let pair = cache.get_address(token_a, token_b);
    info!(%chain_id, %token_a, %token_b, %pair, "Derived pair address");

    println!("{}", pair);
    Ok(())
}
