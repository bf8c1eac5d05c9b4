// src/batch/status.rs

//! Per-job status records and the append-only JSON log sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::errors::Result;
use crate::manifest::Job;

/// Terminal status of one job attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Skipped,
    Ok,
    Failed,
}

/// Self-contained record of one job attempt.
///
/// Created once the outcome is known and never mutated; serialized as one
/// JSON object per line when logging is enabled.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRunStatus {
    pub name: String,
    pub index: usize,
    pub total: usize,
    pub real_dir: String,
    pub gen_dir: String,
    pub backbones: Vec<String>,
    pub command: Vec<String>,
    pub returncode: Option<i32>,
    pub status: JobStatus,
}

impl BatchRunStatus {
    pub fn new(
        job: &Job,
        index: usize,
        total: usize,
        command: Vec<String>,
        returncode: Option<i32>,
        status: JobStatus,
    ) -> Self {
        Self {
            name: job.name.clone(),
            index,
            total,
            real_dir: job.real_dir.clone(),
            gen_dir: job.gen_dir.clone(),
            backbones: job.backbones.iter().map(|b| b.as_str().to_string()).collect(),
            command,
            returncode,
            status,
        }
    }
}

/// Append-only newline-delimited JSON sink.
///
/// The file is opened per append, matching the one-record-per-outcome
/// cadence of the controller. Write errors are not recovered here; they
/// abort the run.
#[derive(Debug, Clone)]
pub struct JsonLog {
    path: PathBuf,
}

impl JsonLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, status: &BatchRunStatus) -> Result<()> {
        let line = serde_json::to_string(status)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
