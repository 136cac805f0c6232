//! Orchestration - shared run context and the dependency graph walker

pub mod context;
pub mod walker;

pub use context::{DEFAULT_CONCURRENCY, RunContext};
