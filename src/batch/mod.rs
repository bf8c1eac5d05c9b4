// src/batch/mod.rs

//! Batch orchestration.
//!
//! - [`controller`] owns the sequential execution loop and its policy
//!   (dry-run, stop-on-error, interruption).
//! - [`status`] defines the per-job status records and the JSON log sink.
//! - [`report`] renders operator-facing progress and the final summary.

pub mod controller;
pub mod report;
pub mod status;

pub use controller::{BatchController, BatchOptions, BatchOutcome, BatchReport};
pub use report::Reporter;
pub use status::{BatchRunStatus, JobStatus, JsonLog};
