// src/lib.rs

pub mod batch;
pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod manifest;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::batch::{BatchController, BatchOptions, BatchOutcome, JsonLog};
use crate::cli::CliArgs;
use crate::errors::{BatchError, Result};
use crate::exec::RealExecutorBackend;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - script path validation
/// - manifest loading + job normalization (fail-fast, before anything runs)
/// - the batch controller with the real process executor
/// - the optional JSON status log
pub async fn run(args: CliArgs) -> Result<BatchOutcome> {
    let script = resolve_script_path(&args.script)?;
    let jobs_base = args.jobs_base.as_ref().map(PathBuf::from);

    let jobs = manifest::load_jobs(&args.jobs_file, jobs_base.as_deref())?;
    info!(jobs = jobs.len(), manifest = %args.jobs_file, "manifest loaded");

    let options = BatchOptions {
        script,
        dry_run: args.dry_run,
        stop_on_error: args.stop_on_error,
        quiet: args.quiet,
        global_extra: args.extra_args,
    };
    let log = args.json_log.map(JsonLog::new);

    let mut controller = BatchController::new(RealExecutorBackend::new(), options, log);
    let report = controller.run(&jobs).await?;

    debug!(?report, "batch finished");
    Ok(report.outcome())
}

/// Check the suite script exists and pin it to an absolute path, so jobs
/// keep working regardless of where relative manifest paths point the
/// working directory.
fn resolve_script_path(script: &str) -> Result<String> {
    let path = PathBuf::from(script);
    if !path.exists() {
        return Err(BatchError::ScriptNotFound(path));
    }
    let absolute = std::fs::canonicalize(&path)?;
    Ok(absolute.to_string_lossy().into_owned())
}
