//! depot - dependency depot CLI

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "depot")]
#[command(
    author,
    version,
    about = "Fetch an npm package and its dependency graph into a local archive depot"
)]
struct Cli {
    /// Package specifier(s): name, name@version, or @scope/name@version
    #[arg(required = true)]
    packages: Vec<String>,

    /// Storage directory for archives and the report
    #[arg(long, env = "DEPOT_DIR", default_value = "packages")]
    dir: PathBuf,

    /// Registry base URL
    #[arg(long, env = "DEPOT_REGISTRY", default_value = depot::registry::DEFAULT_REGISTRY)]
    registry: String,

    /// Clear the storage directory before starting
    #[arg(long)]
    clean: bool,

    /// Maximum in-flight resolutions per dependency list
    #[arg(long, default_value_t = depot::ops::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Network timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    cmd::fetch::fetch(
        &cli.packages,
        cmd::fetch::Options {
            dir: cli.dir,
            registry: cli.registry,
            clean: cli.clean,
            concurrency: cli.concurrency,
            timeout_secs: cli.timeout,
            quiet: cli.quiet,
        },
    )
    .await
}
