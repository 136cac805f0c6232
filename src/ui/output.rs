//! Console reporter
//!
//! Styled status lines with manual cursor control for the in-place download
//! progress readout. All writes go through one mutex so concurrently
//! resolving packages cannot interleave partial lines.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use super::progress::format_download_progress;
use super::reporter::Reporter;

/// Tracks the in-place progress line and per-package throttle buckets.
#[derive(Debug, Default)]
struct LineState {
    progress_shown: bool,
    last_bucket: HashMap<String, u64>,
}

/// Terminal implementation of [`Reporter`].
#[derive(Debug)]
pub struct Console {
    quiet: bool,
    line: Mutex<LineState>,
}

impl Console {
    /// Create a console reporter; `quiet` suppresses progress and info lines
    /// but never warnings or errors.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            line: Mutex::new(LineState::default()),
        }
    }

    /// Clear a pending progress line so the next full line starts clean.
    fn clear_progress(state: &mut LineState) {
        if state.progress_shown {
            let mut out = std::io::stdout();
            let _ = execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
            state.progress_shown = false;
        }
    }
}

impl Reporter for Console {
    fn section(&self, title: &str) {
        if self.quiet {
            return;
        }
        let mut state = self.line.lock().unwrap();
        Self::clear_progress(&mut state);
        let rule = "━".repeat(45_usize.saturating_sub(title.len()));
        println!("{} {}", title.bold(), rule.dark_grey());
    }

    fn downloading(&self, name: &str, version: &str, current: u64, total: Option<u64>) {
        if self.quiet {
            return;
        }

        // Redraw only when the readout would visibly change: every percent
        // with a known total, every 256 KiB without one.
        let bucket = match total {
            Some(total) if total > 0 => current * 100 / total,
            _ => current >> 18,
        };

        let mut state = self.line.lock().unwrap();
        let key = format!("{name}@{version}");
        if state.last_bucket.get(&key) == Some(&bucket) {
            return;
        }
        state.last_bucket.insert(key, bucket);

        let mut out = std::io::stdout();
        let _ = execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
        let _ = write!(
            out,
            "  {} {:<20} {:>10}  {}",
            "●".dark_grey(),
            name.cyan(),
            version.dark_grey(),
            format_download_progress(current, total)
        );
        let _ = out.flush();
        state.progress_shown = true;
    }

    fn done(&self, name: &str, version: &str, detail: &str) {
        let mut state = self.line.lock().unwrap();
        Self::clear_progress(&mut state);
        if self.quiet {
            return;
        }
        println!(
            "  {} {:<20} {:>10}  {}",
            "✓".green(),
            name.cyan(),
            version.dark_grey(),
            detail.dark_grey()
        );
    }

    fn failed(&self, name: &str, version: &str, reason: &str) {
        let mut state = self.line.lock().unwrap();
        Self::clear_progress(&mut state);
        eprintln!(
            "  {} {:<20} {:>10}  {}",
            "✗".red(),
            name.cyan(),
            version.dark_grey(),
            reason.red()
        );
    }

    fn info(&self, msg: &str) {
        if self.quiet {
            return;
        }
        let mut state = self.line.lock().unwrap();
        Self::clear_progress(&mut state);
        println!("  {msg}");
    }

    fn warning(&self, msg: &str) {
        let mut state = self.line.lock().unwrap();
        Self::clear_progress(&mut state);
        println!("  {} {}", "⚠".yellow(), msg.yellow());
    }

    fn error(&self, msg: &str) {
        let mut state = self.line.lock().unwrap();
        Self::clear_progress(&mut state);
        eprintln!("  {} {}", "✗".red(), msg.red());
    }

    fn summary(&self, count: usize, action: &str, elapsed_secs: f64) {
        if self.quiet {
            return;
        }
        let mut state = self.line.lock().unwrap();
        Self::clear_progress(&mut state);
        let noun = if count == 1 { "package" } else { "packages" };
        println!(
            "\n{} {count} {noun} {action} in {elapsed_secs:.1}s",
            "✓".green()
        );
    }
}
