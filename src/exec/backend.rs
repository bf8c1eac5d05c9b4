// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The batch controller talks to an `ExecutorBackend` instead of spawning
//! processes directly. Production code uses [`RealExecutorBackend`]; tests
//! substitute a fake that records commands and replays scripted exit codes
//! without starting real processes.

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{BatchError, Result};

/// What happened to one invocation of the suite script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The process ran to completion with this exit code.
    Exited(i32),
    /// Ctrl-C arrived while waiting on the process; the batch must stop.
    Interrupted,
}

/// Trait abstracting how a single job command is executed.
///
/// The controller calls this once per job and waits for the result before
/// moving on, so implementations never see concurrent calls.
pub trait ExecutorBackend: Send {
    fn run_command<'a>(
        &'a mut self,
        cmd: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutcome>> + Send + 'a>>;
}

/// Real executor backend used in production.
///
/// Spawns the command with inherited stdio (the suite script's output is
/// the operator's business, not ours) and blocks on its exit, racing the
/// wait against Ctrl-C.
#[derive(Debug, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn run_command<'a>(
        &'a mut self,
        cmd: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutcome>> + Send + 'a>> {
        Box::pin(async move {
            let (program, args) = cmd.split_first().ok_or_else(|| {
                BatchError::Other(anyhow::anyhow!("cannot run an empty command"))
            })?;

            debug!(%program, ?args, "spawning suite script");

            // Spawn failure (e.g. missing or non-executable script) is a
            // setup error that aborts the whole batch.
            let mut child = Command::new(program)
                .args(args)
                .spawn()
                .with_context(|| format!("spawning suite script '{program}'"))?;

            tokio::select! {
                status = child.wait() => {
                    let status = status
                        .with_context(|| format!("waiting for suite script '{program}'"))?;
                    let code = status.code().unwrap_or(-1);
                    info!(exit_code = code, success = status.success(), "suite script exited");
                    Ok(ExecOutcome::Exited(code))
                }
                ctrl_c = tokio::signal::ctrl_c() => {
                    ctrl_c.context("listening for Ctrl-C")?;
                    // The child receives the terminal's SIGINT itself; its
                    // handling of it is not ours to manage.
                    info!("interrupt received while waiting on suite script");
                    Ok(ExecOutcome::Interrupted)
                }
            }
        })
    }
}
