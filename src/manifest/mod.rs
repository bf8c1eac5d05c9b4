// src/manifest/mod.rs

//! Jobs manifest handling.
//!
//! - [`loader`] reads the JSON file and handles the two accepted top-level
//!   shapes (a bare list, or an object with a `jobs` list).
//! - [`model`] holds the raw record type and the validated [`Job`] entity.
//! - [`normalize`] validates records and resolves paths.

pub mod loader;
pub mod model;
pub mod normalize;

use std::path::Path;

use crate::errors::Result;

pub use loader::load_raw_jobs;
pub use model::{Backbone, Job, RawJob};
pub use normalize::{build_job, normalize_jobs, resolve_path};

/// Load a manifest and normalize all of its jobs.
///
/// This is the recommended entry point for the rest of the application:
/// it fails before any job runs if the manifest shape or any single record
/// is invalid.
pub fn load_jobs(path: impl AsRef<Path>, base: Option<&Path>) -> Result<Vec<Job>> {
    let raw_jobs = load_raw_jobs(path)?;
    normalize_jobs(raw_jobs, base)
}
