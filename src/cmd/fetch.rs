//! Fetch command - the whole run, from root validation to report

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::task::JoinSet;

use depot::core::spec::PackageSpec;
use depot::core::version::resolve_version;
use depot::ops::{RunContext, walker};
use depot::ui::{Console, Reporter};

/// Settings for one fetch run, filled from the CLI.
#[derive(Debug)]
pub struct Options {
    pub dir: PathBuf,
    pub registry: String,
    pub clean: bool,
    pub concurrency: usize,
    pub timeout_secs: u64,
    pub quiet: bool,
}

/// Resolve and download every root and its transitive dependencies.
///
/// Only setup can fail: a malformed root specifier, an unparseable root
/// version, or a storage directory that cannot be prepared. Once roots
/// launch, per-package failures are reported and the run completes with a
/// report regardless.
pub async fn fetch(packages: &[String], opts: Options) -> Result<()> {
    // Validate every root before any work starts.
    let mut roots = Vec::new();
    for raw in packages {
        let spec =
            PackageSpec::parse(raw).with_context(|| format!("invalid root package '{raw}'"))?;
        let version = resolve_version(spec.range())
            .with_context(|| format!("invalid root package '{raw}'"))?;
        roots.push((spec, version));
    }

    if opts.clean && opts.dir.exists() {
        std::fs::remove_dir_all(&opts.dir)
            .with_context(|| format!("failed to clear {}", opts.dir.display()))?;
    }
    std::fs::create_dir_all(&opts.dir)
        .with_context(|| format!("failed to create {}", opts.dir.display()))?;

    // Stall-bounded, not total-duration-bounded: a slow but live tarball
    // stream may legitimately run longer than any fixed request budget.
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(opts.timeout_secs))
        .read_timeout(Duration::from_secs(opts.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;

    let reporter: Arc<dyn Reporter> = Arc::new(Console::new(opts.quiet));
    let ctx = Arc::new(RunContext::new(
        client,
        &opts.registry,
        Arc::clone(&reporter),
        opts.dir.clone(),
        opts.concurrency,
    ));

    reporter.section("Fetching");
    let start = Instant::now();

    // All roots launch at once; only each node's dependency list is throttled.
    let mut set = JoinSet::new();
    for (spec, _) in &roots {
        set.spawn(walker::resolve(
            Arc::clone(&ctx),
            spec.name.clone(),
            spec.range.clone(),
            None,
        ));
    }
    while let Some(res) = set.join_next().await {
        if let Err(e) = res {
            reporter.error(&format!("resolution task panicked: {e}"));
        }
    }

    let root_keys = roots
        .iter()
        .map(|(spec, version)| format!("{}@{version}", spec.name))
        .collect();
    let report = ctx.finish(root_keys);
    let count = report.packages.len();
    let report_path = report.write_to(&opts.dir).context("failed to write report")?;

    reporter.summary(count, "fetched", start.elapsed().as_secs_f64());
    reporter.info(&format!("report written to {}", report_path.display()));

    Ok(())
}
