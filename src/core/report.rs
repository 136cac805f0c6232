//! Final run report - package list, dependency trees, license warnings

use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Report filename inside the storage directory, overwritten each run.
pub const REPORT_FILE: &str = "report.txt";

/// Sentinel rendered when the run produced no license warnings.
pub const NO_WARNINGS: &str = "no license warnings";

/// Accumulated output of one resolution run.
#[derive(Debug, Default)]
pub struct Report {
    /// Root package keys, one tree is rendered per entry.
    pub roots: Vec<String>,
    /// All claimed package keys in discovery order.
    pub packages: Vec<String>,
    /// First-recorded parent/child edges.
    pub edges: Vec<(String, String)>,
    /// License warnings in discovery order.
    pub warnings: Vec<String>,
}

impl Report {
    /// Render all three sections as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Packages ({})\n", self.packages.len()));
        for key in &self.packages {
            out.push_str(&format!("  {key}\n"));
        }

        out.push_str("\nDependency tree\n");
        let children = self.child_map();
        for root in &self.roots {
            let mut visited = HashSet::new();
            render_subtree(root, 0, &children, &mut visited, &mut out);
        }

        out.push_str("\nLicense warnings\n");
        if self.warnings.is_empty() {
            out.push_str(&format!("  {NO_WARNINGS}\n"));
        } else {
            for warning in &self.warnings {
                out.push_str(&format!("  {warning}\n"));
            }
        }

        out
    }

    /// Render and write the report into `dir`, overwriting a previous run's file.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<std::path::PathBuf> {
        let path = dir.join(REPORT_FILE);
        std::fs::write(&path, self.render())?;
        Ok(path)
    }

    /// Edge list as an ordered adjacency map, keeping only the first edge per child.
    fn child_map(&self) -> HashMap<&str, Vec<&str>> {
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut claimed: HashSet<&str> = HashSet::new();
        for (parent, child) in &self.edges {
            if claimed.insert(child.as_str()) {
                children
                    .entry(parent.as_str())
                    .or_default()
                    .push(child.as_str());
            }
        }
        children
    }
}

/// Pre-order depth-first rendering, one line per node, indent = depth.
fn render_subtree(
    key: &str,
    depth: usize,
    children: &HashMap<&str, Vec<&str>>,
    visited: &mut HashSet<String>,
    out: &mut String,
) {
    if !visited.insert(key.to_string()) {
        return;
    }
    out.push_str(&format!("{}{key}\n", "  ".repeat(depth + 1)));
    if let Some(kids) = children.get(key) {
        for kid in kids {
            render_subtree(kid, depth + 1, children, visited, out);
        }
    }
}
