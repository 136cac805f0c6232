//! depot - a dependency depot
//!
//! Fetches an npm package and its full transitive dependency graph from a
//! registry, storing every resolved version as a tarball in a flat local
//! directory and writing a dependency report with license audit results.
//!
//! # Architecture
//!
//! - **Pure core**: specifier parsing, version coercion, license
//!   classification, and report rendering live in `core` and touch no I/O.
//! - **Shared context**: one [`ops::RunContext`] carries the HTTP client,
//!   reporter handle, and the run's accumulating state into every
//!   concurrently executing resolution task.
//! - **Reporter trait**: terminal rendering is injected through
//!   [`ui::Reporter`], keeping the walker testable without a console.
//!
//! # Storage layout
//!
//! ```text
//! <dir>/
//! ├── lodash-4.17.21.tgz      # one flat file per resolved package
//! ├── @scope_pkg-1.0.0.tgz    # scoped names flattened with '_'
//! └── report.txt              # package list, trees, license warnings
//! ```

pub mod core;
pub mod io;
pub mod ops;
pub mod registry;
pub mod ui;

// Re-exports for convenience
pub use core::license;
pub use core::report;
pub use core::spec;
pub use core::version;
pub use io::download;
pub use ops::walker;

/// User Agent string
pub const USER_AGENT: &str = concat!("depot/", env!("CARGO_PKG_VERSION"));

/// Extract the filename from a URL.
///
/// # Example
///
/// ```
/// use depot::filename_from_url;
///
/// assert_eq!(filename_from_url("https://example.com/path/to/file.tgz"), "file.tgz");
/// assert_eq!(filename_from_url(""), "");
/// ```
pub fn filename_from_url(url: &str) -> &str {
    url.split('/').next_back().unwrap_or("")
}
