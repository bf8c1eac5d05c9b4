// src/batch/report.rs

//! Operator-facing progress output.
//!
//! This is plain stdout/stderr text, independent of whether the JSON log is
//! enabled. `tracing` is reserved for diagnostics; the lines here are the
//! tool's actual user interface.

/// Renders per-job headings, outcomes, and the final summary.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the `[JOB i/N] name` heading, framed with `=` rulers unless
    /// quiet mode is on.
    pub fn heading(&self, index: usize, total: usize, name: &str) {
        let heading = format!("[JOB {index}/{total}] {name}");
        if self.quiet {
            println!("{heading}");
        } else {
            let ruler = "=".repeat(heading.len());
            println!("{ruler}");
            println!("{heading}");
            println!("{ruler}");
        }
    }

    /// Echo the fully rendered command line (suppressed in quiet mode).
    pub fn command(&self, rendered: &str) {
        if !self.quiet {
            println!("{rendered}");
        }
    }

    pub fn success(&self) {
        println!("-> SUCCESS");
    }

    pub fn failure(&self, returncode: i32) {
        eprintln!("-> FAILED (return code {returncode})");
    }

    pub fn interrupted(&self) {
        eprintln!("[INFO] Interrupted by user");
    }

    pub fn no_jobs(&self) {
        println!("[WARN] No jobs found in manifest. Nothing to do.");
    }

    pub fn summary(&self, successes: usize, failures: usize) {
        println!("Completed batch: {successes} succeeded, {failures} failed.");
    }
}
