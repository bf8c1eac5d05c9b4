// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `fidbatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fidbatch",
    version,
    about = "Batch runner for multiple FID suite evaluations.",
    long_about = None,
    after_help = "Example:\n  \
        fidbatch fid/batch_jobs.json -- --batch-size 64\n\
        This forwards '--batch-size 64' to the suite script for every job."
)]
pub struct CliArgs {
    /// Path to a JSON file containing a list of jobs or an object with a
    /// 'jobs' list.
    #[arg(value_name = "JOBS_FILE")]
    pub jobs_file: String,

    /// Path to the FID suite script.
    #[arg(long, value_name = "PATH", default_value = "run_fid_suite_docker.sh")]
    pub script: String,

    /// If set, resolve relative real/gen directories against this base path.
    #[arg(long, value_name = "PATH")]
    pub jobs_base: Option<String>,

    /// Print the commands that would run but do not execute them.
    #[arg(long)]
    pub dry_run: bool,

    /// Abort the batch when a job fails (default: keep going).
    #[arg(long)]
    pub stop_on_error: bool,

    /// Append newline-delimited JSON status objects to this file.
    #[arg(long, value_name = "PATH")]
    pub json_log: Option<String>,

    /// Only print job summaries (suppresses per-command echo framing).
    #[arg(long)]
    pub quiet: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FIDBATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Additional arguments appended after '--' for every run.
    #[arg(last = true, value_name = "EXTRA_ARGS")]
    pub extra_args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
