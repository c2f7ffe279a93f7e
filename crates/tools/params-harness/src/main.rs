//! CLI harness for inspecting chain parameters
//!
//! This tool allows:
//! - Dumping a network's parameter set
//! - Running the genesis self-check for every network
//! - Resolving upgrades, founders rewards and checkpoints at a height
//! - Estimating the network height from a local tip
//! - Exercising the mining metrics with solver-like threads

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use amicoin_metrics::MiningMetrics;
use amicoin_params::{BlockHash, ParamsRegistry, SelectOptions, Sha256dGenesisBuilder};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "params-harness")]
#[command(about = "AMICoin chain parameter harness", long_about = None)]
struct Cli {
    /// Network to select (main, test, regtest)
    #[arg(short, long, global = true, default_value = "main")]
    network: String,

    /// Require regtest coinbase outputs to be shielded
    #[arg(long, global = true)]
    regtest_protect_coinbase: bool,

    /// JSON file with selection options
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected network's parameters
    Show,

    /// Rebuild every genesis block and compare it to the pinned hashes
    CheckGenesis,

    /// Show upgrade status at a height
    Upgrades {
        /// Block height
        #[arg(long)]
        height: u32,
    },

    /// Show the founders reward recipient at a height
    Founders {
        /// Block height
        #[arg(long)]
        height: u32,
    },

    /// Check a block hash against the checkpoints
    Checkpoint {
        /// Block height
        #[arg(long)]
        height: u32,

        /// Block hash (display hex)
        #[arg(long)]
        hash: String,
    },

    /// Estimate how far the network has progressed
    Estimate {
        /// Local tip height
        #[arg(long)]
        tip_height: u32,

        /// Median time of the local tip
        #[arg(long)]
        tip_median_time: i64,

        /// Transactions in the local chain, for the progress guess
        #[arg(long)]
        chain_tx: Option<u64>,
    },

    /// Run solver-like threads against the mining metrics
    BenchMetrics {
        /// Number of threads
        #[arg(short, long, default_value = "4")]
        threads: usize,

        /// How long each thread runs
        #[arg(short, long, default_value = "500")]
        millis: u64,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => SelectOptions::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SelectOptions::default(),
    };
    options.regtest_protect_coinbase |= cli.regtest_protect_coinbase;

    let mut registry = ParamsRegistry::new();
    registry
        .select_network_by_name(&cli.network, &options)
        .context("selecting network")?;

    match cli.command {
        Commands::Show => run_show(&registry),
        Commands::CheckGenesis => run_check_genesis(&registry),
        Commands::Upgrades { height } => run_upgrades(&registry, height),
        Commands::Founders { height } => run_founders(&registry, height)?,
        Commands::Checkpoint { height, hash } => run_checkpoint(&registry, height, &hash)?,
        Commands::Estimate {
            tip_height,
            tip_median_time,
            chain_tx,
        } => run_estimate(&registry, tip_height, tip_median_time, chain_tx),
        Commands::BenchMetrics { threads, millis } => run_bench_metrics(threads, millis)?,
    }

    Ok(())
}

fn run_show(registry: &ParamsRegistry) {
    let params = registry.active();
    let consensus = params.consensus();

    println!("Network:          {}", params.id());
    println!("Currency:         {}", params.currency_units());
    println!("Coin type:        {}", params.bip44_coin_type());
    println!("Magic:            {}", hex::encode(params.message_start()));
    println!("Port:             {}", params.default_port());
    println!("Prune after:      {}", params.prune_after_height());
    println!(
        "Equihash:         N={} K={} ({} byte solutions)",
        params.equihash().n(),
        params.equihash().k(),
        params.equihash().solution_size()
    );
    println!("Genesis:          {}", consensus.hash_genesis_block);
    println!("Target spacing:   {}s", consensus.pow_target_spacing);
    println!("Protect coinbase: {}", consensus.coinbase_must_be_protected);
    println!(
        "Founders:         {} addresses until height {}",
        params.founders_reward().len(),
        params.founders_reward().last_reward_height()
    );
    println!(
        "Checkpoints:      {} (last at {})",
        params.checkpoints().len(),
        params.checkpoints().last_checkpoint().height
    );
    for seed in params.dns_seeds() {
        println!("Seed:             {} ({})", seed.host, seed.name);
    }
    println!("Behavior:         {:?}", params.behavior());
}

fn run_check_genesis(registry: &ParamsRegistry) {
    registry.check_all_genesis(&Sha256dGenesisBuilder);
    info!("Genesis blocks verified for every network");
}

fn run_upgrades(registry: &ParamsRegistry, height: u32) {
    let upgrades = &registry.active().consensus().upgrades;

    for (idx, upgrade) in upgrades.iter() {
        let status = if upgrades.is_activated(idx, height) {
            "active"
        } else {
            "inactive"
        };
        println!(
            "{:<12} {:<8} activation {:<8} protocol {}",
            idx.to_string(),
            status,
            upgrade.activation_height.to_string(),
            upgrade.protocol_version
        );
    }

    let epoch = upgrades.current_epoch(height);
    println!(
        "Epoch at {}: {} (branch {:08x})",
        height,
        epoch,
        epoch.branch_id()
    );
    match upgrades.next_activation_height(height) {
        Some(next) => println!("Next activation at {}", next),
        None => println!("No scheduled activation ahead"),
    }
}

fn run_founders(registry: &ParamsRegistry, height: u32) -> anyhow::Result<()> {
    let params = registry.active();
    let address = params.founders_reward_address_at_height(height)?;
    let script = params.founders_reward_script_at_height(height)?;
    let index = params.founders_reward().index_at_height(height)?;

    println!("Height:  {}", height);
    println!("Index:   {}", index);
    println!("Address: {}", address);
    println!("Script:  {}", hex::encode(script.as_bytes()));
    Ok(())
}

fn run_checkpoint(registry: &ParamsRegistry, height: u32, hash: &str) -> anyhow::Result<()> {
    let candidate: BlockHash = hash.parse().context("parsing block hash")?;
    let checkpoints = registry.active().checkpoints();
    let verdict = checkpoints.verify(height, &candidate);

    println!("{:?}", verdict);
    if !verdict.is_acceptable() {
        anyhow::bail!("block {} at height {} conflicts with a checkpoint", candidate, height);
    }
    Ok(())
}

fn run_estimate(
    registry: &ParamsRegistry,
    tip_height: u32,
    tip_median_time: i64,
    chain_tx: Option<u64>,
) {
    let params = registry.active();
    let estimate = params.checkpoints().estimate_network_height(
        tip_height,
        tip_median_time,
        i64::from(params.genesis().time),
        params.consensus().pow_target_spacing,
    );
    println!("Estimated network height: {}", estimate);

    if let Some(chain_tx) = chain_tx {
        let now = chrono::Utc::now().timestamp();
        let progress = params
            .checkpoints()
            .guess_verification_progress(chain_tx, tip_median_time, now);
        println!("Verification progress:    {:.2}%", progress * 100.0);
    }
}

fn run_bench_metrics(threads: usize, millis: u64) -> anyhow::Result<()> {
    let metrics = Arc::new(MiningMetrics::new());
    metrics.mark_start_time();
    let run_for = Duration::from_millis(millis);

    info!("Running {} solver threads for {}ms", threads, millis);

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let metrics = Arc::clone(&metrics);
            thread::spawn(move || {
                let deadline = Instant::now() + run_for;
                metrics.mining_timer.start();
                while Instant::now() < deadline {
                    metrics.eh_solver_runs.increment();
                    metrics.solution_target_checks.increment();
                }
                metrics.mining_timer.stop();
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("solver thread panicked"))?;
    }

    let snapshot = metrics.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
