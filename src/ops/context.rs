//! Shared resolution context.
//!
//! One `RunContext` is created per invocation and handed by `Arc` to every
//! concurrently executing resolution task. All accumulating collections live
//! behind a single mutex so that claiming a package key, appending it to the
//! package list, and recording its parent edge happen as one atomic section.
//! The lock is never held across an await point.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::core::report::Report;
use crate::registry::RegistryClient;
use crate::ui::Reporter;

/// Default bound on in-flight resolutions per dependency list.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Accumulated state of one resolution run.
#[derive(Debug, Default)]
struct RunState {
    claimed: HashSet<String>,
    packages: Vec<String>,
    edges: Vec<(String, String)>,
    warnings: Vec<String>,
}

/// Groups the collaborators and shared state used during a resolution run.
pub struct RunContext {
    /// Shared HTTP client used for tarball downloads.
    pub client: reqwest::Client,
    /// Metadata client over the configured registry.
    pub registry: RegistryClient,
    /// Sink for user-facing progress and status.
    pub reporter: Arc<dyn Reporter>,
    /// Flat storage directory for downloaded archives.
    pub dest_dir: PathBuf,
    /// Bound on in-flight resolutions per dependency list.
    pub concurrency: usize,
    state: Mutex<RunState>,
}

impl RunContext {
    pub fn new(
        client: reqwest::Client,
        registry_url: &str,
        reporter: Arc<dyn Reporter>,
        dest_dir: PathBuf,
        concurrency: usize,
    ) -> Self {
        Self {
            registry: RegistryClient::new(client.clone(), registry_url),
            client,
            reporter,
            dest_dir,
            concurrency: concurrency.max(1),
            state: Mutex::new(RunState::default()),
        }
    }

    /// Atomically claim a package key for this run.
    ///
    /// The first caller wins: the key joins the package list and, when a
    /// parent is given, its first edge is recorded. Returns `false` when the
    /// key was already claimed (including keys still in flight), in which
    /// case nothing is recorded.
    pub fn claim(&self, key: &str, parent: Option<&str>) -> bool {
        let mut state = self.state.lock().unwrap();
        if !state.claimed.insert(key.to_string()) {
            return false;
        }
        state.packages.push(key.to_string());
        if let Some(parent) = parent {
            state.edges.push((parent.to_string(), key.to_string()));
        }
        true
    }

    /// Append a license warning in discovery order.
    pub fn push_warning(&self, warning: String) {
        self.state.lock().unwrap().warnings.push(warning);
    }

    /// Snapshot the accumulated state into a report. Call after all
    /// resolution tasks have joined.
    pub fn finish(&self, roots: Vec<String>) -> Report {
        let state = self.state.lock().unwrap();
        Report {
            roots,
            packages: state.packages.clone(),
            edges: state.edges.clone(),
            warnings: state.warnings.clone(),
        }
    }
}

impl std::fmt::Debug for RunContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("dest_dir", &self.dest_dir)
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}
