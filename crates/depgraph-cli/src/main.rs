use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use depgraph_cli::{DepgraphOptions, run_main};
use depgraph_core::{Error, Result};
use depgraph_dot::{RenderMode, WeightScheme};

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    about = "Draw the static import graph of a Python project",
    version
)]
pub struct Cli {
    /// Root paths to analyze (repeatable)
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        num_args = 1..,
        action = clap::ArgAction::Append,
        default_value = "."
    )]
    paths: Vec<String>,

    /// File or directory names to exclude (repeatable)
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "NAME",
        num_args = 1..,
        action = clap::ArgAction::Append
    )]
    exclude: Vec<String>,

    /// Explicit cluster names; omit to derive clusters from directories
    #[arg(
        short = 'c',
        long = "cluster",
        value_name = "NAME",
        num_args = 1..,
        action = clap::ArgAction::Append
    )]
    clusters: Option<Vec<String>>,

    /// Type of graph: 0 (without clusters), 1 (with clusters),
    /// 2 (only clusters), 3 (only clusters, drawing also self edges)
    #[arg(short = 'g', long = "graph", value_name = "N", default_value_t = 0)]
    graph: usize,

    /// Do not descend into subdirectories
    #[arg(short = 'r', long = "no-recursive", default_value_t = false)]
    no_recursive: bool,

    /// Merge common paths of different edges
    #[arg(short = 'C', long = "concentrate", default_value_t = false)]
    concentrate: bool,

    /// Color damping factor (>= 1.0); defaults per graph type
    #[arg(long = "damping", value_name = "FACTOR")]
    damping: Option<f64>,

    /// Edge weight scheme: 'exp' or 'linear'
    #[arg(long = "weights", value_name = "SCHEME", default_value = "exp")]
    weights: String,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    // Validate configuration before producing any output.
    let mode = RenderMode::from_number(args.graph)?;
    let weights = match args.weights.as_str() {
        "exp" | "exponential" => WeightScheme::Exponential,
        "linear" => WeightScheme::Linear,
        other => {
            return Err(Error::config_invalid(format!(
                "unknown weight scheme '{other}' (expected 'exp' or 'linear')"
            )));
        }
    };

    let opts = DepgraphOptions {
        paths: args.paths,
        exclude: args.exclude,
        clusters: args.clusters,
        mode,
        concentrate: args.concentrate,
        recursive: !args.no_recursive,
        damping: args.damping,
        weights,
    };

    let output = run_main(&opts)?;
    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!(path, "output written");
    } else {
        print!("{output}");
    }
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
