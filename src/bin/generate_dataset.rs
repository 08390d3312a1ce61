//! Hash reversal dataset generator.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hashtrace::dataset::{generate, GeneratorConfig};
use hashtrace::{config, HashAlgo};

#[derive(Parser, Debug)]
#[command(name = "generate_dataset")]
#[command(about = "Hash reversal dataset generator")]
struct Args {
    /// Number of samples to use in the dataset
    #[arg(long, default_value_t = 20000)]
    num_samples: u64,

    /// Hashing algorithm to apply to the input data
    #[arg(long, default_value = "sha256", value_parser = HashAlgo::from_str)]
    hash_algo: HashAlgo,

    /// RNG seed; identical seeds reproduce identical datasets
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output directory (default: HASHTRACE_DATA_DIR, then "data")
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    enable_tracing();
    let args = Args::parse();

    let cfg = GeneratorConfig {
        num_samples: args.num_samples,
        algo: args.hash_algo,
        seed: args.seed,
        data_dir: args.data_dir.unwrap_or_else(config::default_data_dir),
    };
    let report = generate(&cfg)?;

    info!(
        "generated dataset with {} samples (hash={}) at {}",
        report.samples,
        cfg.algo.name(),
        report.path.display()
    );
    Ok(())
}

fn enable_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("subscriber set failed");
}
