// src/manifest/normalize.rs

//! Turns raw manifest records into validated [`Job`]s.
//!
//! All validation happens here, before any job runs: a bad record anywhere
//! in the manifest fails the whole batch at load time, so partial manifests
//! never produce partial execution.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::errors::{BatchError, Result};
use crate::manifest::model::{Backbone, Job, RawJob, ensure_list};

/// Normalize every raw record in manifest order, short-circuiting on the
/// first invalid one.
pub fn normalize_jobs(raw_jobs: Vec<RawJob>, base: Option<&Path>) -> Result<Vec<Job>> {
    raw_jobs
        .into_iter()
        .map(|raw| build_job(raw, base))
        .collect()
}

/// Validate a single record and resolve its paths.
pub fn build_job(raw: RawJob, base: Option<&Path>) -> Result<Job> {
    let real_dir_raw = required_field(raw.real_dir.as_deref(), "real_dir")?;
    let gen_dir_raw = required_field(raw.gen_dir.as_deref(), "gen_dir")?;

    // Name defaults are synthesized from the *unresolved* directory strings
    // so the display name matches what the manifest author wrote.
    let name = match raw.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{real_dir_raw} -> {gen_dir_raw}"),
    };

    let backbones =
        normalize_backbones(ensure_list(&raw.cem_backbones, "cem_backbones")?)?;

    let cem_weights = match raw.cem_weights.as_deref() {
        Some(weights) => {
            if backbones.len() != 1 {
                return Err(BatchError::Job(format!(
                    "job '{name}' specifies cem_weights but also multiple backbones. \
                     Provide separate jobs when custom weights differ."
                )));
            }
            Some(resolve_path(base, weights))
        }
        None => None,
    };

    let script_args = ensure_list(&raw.script_args, "script_args")?;
    let extra_args = ensure_list(&raw.extra_args, "extra_args")?;

    Ok(Job {
        name,
        real_dir: resolve_path(base, real_dir_raw),
        gen_dir: resolve_path(base, gen_dir_raw),
        backbones,
        cem_weights,
        script_args,
        extra_args,
    })
}

fn required_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    value.ok_or_else(|| {
        BatchError::Job(format!("job is missing required field '{field}'"))
    })
}

/// Validate backbone identifiers and deduplicate them, preserving the order
/// of first occurrence.
///
/// An empty list (field absent or explicitly `[]`) selects the default
/// backbone.
pub fn normalize_backbones(values: Vec<String>) -> Result<Vec<Backbone>> {
    let values = if values.is_empty() {
        vec![Backbone::default().as_str().to_string()]
    } else {
        values
    };

    let mut result: Vec<Backbone> = Vec::new();
    for raw in &values {
        let backbone: Backbone = raw.parse()?;
        if !result.contains(&backbone) {
            result.push(backbone);
        }
    }
    Ok(result)
}

/// Resolve a manifest path string.
///
/// - Absolute paths pass through unchanged.
/// - Relative paths are joined to `base` (when given) and canonicalized;
///   when the joined path does not exist yet, `.`/`..` segments are still
///   cleaned up lexically.
/// - Without a base, the string is used as-is.
pub fn resolve_path(base: Option<&Path>, candidate: &str) -> String {
    let path = Path::new(candidate);
    if path.is_absolute() {
        return candidate.to_string();
    }
    let Some(base) = base else {
        return candidate.to_string();
    };

    let joined = base.join(path);
    let resolved = fs::canonicalize(&joined).unwrap_or_else(|_| lexical_cleanup(&joined));
    resolved.to_string_lossy().into_owned()
}

fn lexical_cleanup(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}
