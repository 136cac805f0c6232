//! Dependency graph walker
//!
//! Recursively resolves a package and everything it depends on. Each node
//! claims its key atomically (so equivalent requests racing in from
//! different parents collapse to one resolution), fetches metadata, audits
//! the license, schedules the archive download, and fans out into its
//! dependency list with a bounded number in flight.
//!
//! Failures never escape a node: a dependency that cannot be resolved is
//! reported and skipped while its siblings, parent, and the rest of the
//! graph continue. Cycles terminate through the claim check, since a key
//! that is still in flight short-circuits exactly like a completed one.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};

use crate::core::license;
use crate::core::version::{LATEST_TAG, resolve_version};
use crate::io::download::{Outcome, fetch_archive};
use crate::ops::RunContext;
use crate::ui::progress::format_size;

/// Resolve `name` at `range` and recurse into its dependencies.
///
/// Never returns an error; every per-node failure is converted to reporter
/// output and a trace record at the node where it happened. The bound on
/// in-flight work applies to this node's dependency list only - sibling
/// subtrees at other depths keep resolving independently.
pub fn resolve(
    ctx: Arc<RunContext>,
    name: String,
    range: Option<String>,
    parent: Option<String>,
) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        let version = match resolve_version(range.as_deref()) {
            Ok(version) => version,
            Err(e) => {
                // Roots are validated before launch, so this is always a
                // dependency: skip it and let the rest of the graph proceed.
                ctx.reporter.warning(&format!("skipping {name}: {e}"));
                tracing::warn!("dependency {name} skipped: {e}");
                return;
            }
        };
        let key = format!("{name}@{version}");

        if !ctx.claim(&key, parent.as_deref()) {
            return;
        }

        let meta = match ctx.registry.fetch(&name, &version).await {
            Ok(meta) => meta,
            Err(e) => {
                ctx.reporter.failed(&name, &version, &e.to_string());
                tracing::warn!("metadata fetch for {key} failed: {e}");
                return;
            }
        };

        if version == LATEST_TAG {
            tracing::debug!("registry resolved {name}@latest to {}", meta.version);
        }

        if let Some(warning) = license::audit(&key, meta.license.as_deref()) {
            ctx.reporter.warning(&warning);
            ctx.push_warning(warning);
        }

        match fetch_archive(
            &ctx.client,
            &name,
            &version,
            &meta.dist.tarball,
            &ctx.dest_dir,
            ctx.reporter.as_ref(),
        )
        .await
        {
            Ok(Outcome::Downloaded(bytes)) => ctx.reporter.done(&name, &version, &format_size(bytes)),
            Ok(Outcome::Cached) => ctx.reporter.done(&name, &version, "cached"),
            Err(e) => {
                // The archive is lost for this run but the subtree is not.
                ctx.reporter.failed(&name, &version, &e.to_string());
                tracing::warn!("archive fetch for {key} failed: {e}");
            }
        }

        let mut pending = Vec::new();
        for (dep_name, dep_range) in meta.dependencies {
            match resolve_version(Some(&dep_range)) {
                Ok(_) => pending.push((dep_name, dep_range)),
                Err(e) => {
                    ctx.reporter.warning(&format!("skipping {dep_name}: {e}"));
                    tracing::warn!("dependency of {key} skipped: {e}");
                }
            }
        }

        stream::iter(pending)
            .map(|(dep_name, dep_range)| {
                resolve(
                    Arc::clone(&ctx),
                    dep_name,
                    Some(dep_range),
                    Some(key.clone()),
                )
            })
            .buffer_unordered(ctx.concurrency)
            .collect::<Vec<_>>()
            .await;
    })
}
