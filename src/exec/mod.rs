// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] builds and renders the argument vector for each job.
//! - [`backend`] provides the `ExecutorBackend` trait and the concrete
//!   `RealExecutorBackend` used in production; tests replace it with a
//!   fake implementation.

pub mod backend;
pub mod command;

pub use backend::{ExecOutcome, ExecutorBackend, RealExecutorBackend};
pub use command::{build_command, render_command};
