// src/batch/controller.rs

//! The batch execution loop.
//!
//! Jobs run strictly sequentially in manifest order. The controller owns
//! the success/failure counters and the optional JSON log sink; both are
//! only touched between job executions, so there is no shared state to
//! protect.

use tracing::{debug, warn};

use crate::batch::report::Reporter;
use crate::batch::status::{BatchRunStatus, JobStatus, JsonLog};
use crate::errors::Result;
use crate::exec::{ExecOutcome, ExecutorBackend, build_command, render_command};
use crate::manifest::Job;

/// Options shaping one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Path to the suite script placed at the front of every command.
    pub script: String,
    /// Build and print commands without executing anything.
    pub dry_run: bool,
    /// Halt the loop right after the first failing job.
    pub stop_on_error: bool,
    /// Suppress rulers and per-command echo.
    pub quiet: bool,
    /// Passthrough arguments appended after `--` for every job.
    pub global_extra: Vec<String>,
}

/// How a finished batch run should be reflected in the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    AllOk,
    SomeFailed,
    Interrupted,
}

impl BatchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            BatchOutcome::AllOk => 0,
            BatchOutcome::SomeFailed => 1,
            BatchOutcome::Interrupted => 130,
        }
    }
}

/// Aggregate result of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub successes: usize,
    pub failures: usize,
    pub interrupted: bool,
}

impl BatchReport {
    pub fn outcome(&self) -> BatchOutcome {
        if self.interrupted {
            BatchOutcome::Interrupted
        } else if self.failures > 0 {
            BatchOutcome::SomeFailed
        } else {
            BatchOutcome::AllOk
        }
    }
}

/// Drives jobs through the executor one at a time.
///
/// Generic over the executor backend so tests can substitute a fake that
/// never spawns processes.
pub struct BatchController<E> {
    executor: E,
    options: BatchOptions,
    log: Option<JsonLog>,
    reporter: Reporter,
}

impl<E: ExecutorBackend> BatchController<E> {
    pub fn new(executor: E, options: BatchOptions, log: Option<JsonLog>) -> Self {
        let reporter = Reporter::new(options.quiet);
        Self {
            executor,
            options,
            log,
            reporter,
        }
    }

    /// Run every job in order and return the aggregate report.
    ///
    /// Per-job execution failures are counted, not propagated; only setup
    /// errors (spawn failure, unwritable log sink) abort with `Err`.
    pub async fn run(&mut self, jobs: &[Job]) -> Result<BatchReport> {
        let total = jobs.len();
        let mut report = BatchReport::default();

        if jobs.is_empty() {
            self.reporter.no_jobs();
        }

        for (idx, job) in jobs.iter().enumerate() {
            let index = idx + 1;
            let cmd = build_command(&self.options.script, job, &self.options.global_extra);

            self.reporter.heading(index, total, &job.name);
            self.reporter.command(&render_command(&cmd));

            if self.options.dry_run {
                debug!(job = %job.name, index, "dry-run, skipping execution");
                self.append_log(BatchRunStatus::new(
                    job,
                    index,
                    total,
                    cmd,
                    None,
                    JobStatus::Skipped,
                ))?;
                continue;
            }

            match self.executor.run_command(&cmd).await? {
                ExecOutcome::Exited(0) => {
                    report.successes += 1;
                    self.reporter.success();
                    self.append_log(BatchRunStatus::new(
                        job,
                        index,
                        total,
                        cmd,
                        Some(0),
                        JobStatus::Ok,
                    ))?;
                }
                ExecOutcome::Exited(rc) => {
                    report.failures += 1;
                    self.reporter.failure(rc);
                    self.append_log(BatchRunStatus::new(
                        job,
                        index,
                        total,
                        cmd,
                        Some(rc),
                        JobStatus::Failed,
                    ))?;
                    if self.options.stop_on_error {
                        warn!(job = %job.name, "stop-on-error set, halting batch");
                        break;
                    }
                }
                ExecOutcome::Interrupted => {
                    report.interrupted = true;
                    self.reporter.interrupted();
                    break;
                }
            }
        }

        self.reporter.summary(report.successes, report.failures);
        Ok(report)
    }

    fn append_log(&self, status: BatchRunStatus) -> Result<()> {
        if let Some(log) = &self.log {
            log.append(&status)?;
        }
        Ok(())
    }
}
