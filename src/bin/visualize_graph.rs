//! Render the connected component containing the prediction bit.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hashtrace::graph::BitGraph;
use hashtrace::{config, render};

#[derive(Parser, Debug)]
#[command(name = "visualize_graph")]
#[command(about = "Adjacency matrix component visualizer")]
struct Args {
    /// Comma-delimited boolean adjacency matrix file
    matrix: PathBuf,

    /// Output image path (default: matrix path with a .png extension)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Bit position whose component is retained
    #[arg(long, default_value_t = config::BIT_PRED)]
    bit: usize,
}

fn main() -> Result<()> {
    enable_tracing();
    let args = Args::parse();

    let full = BitGraph::from_adjacency_file(&args.matrix)?;
    let (component, _summary) = full.retain_component_of(args.bit)?;

    let out = args.out.unwrap_or_else(|| args.matrix.with_extension("png"));
    info!("visualizing undirected Bayesian network...");
    render::render_png(&component, &out)?;
    info!("wrote {}", out.display());
    Ok(())
}

fn enable_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("subscriber set failed");
}
