// src/manifest/loader.rs

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::{BatchError, Result};
use crate::manifest::model::RawJob;

/// Read a jobs manifest and return the raw job records in manifest order.
///
/// The top-level JSON value may be either:
/// - a list of job objects, or
/// - an object with a `jobs` key holding such a list.
///
/// This only handles the manifest shape; field validation happens in
/// [`crate::manifest::normalize`].
pub fn load_raw_jobs(path: impl AsRef<Path>) -> Result<Vec<RawJob>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&contents)?;

    let entries = match data {
        Value::Object(mut map) => match map.remove("jobs") {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(BatchError::Manifest("'jobs' must be a list".to_string()));
            }
            None => {
                return Err(BatchError::Manifest(
                    "JSON object must contain a 'jobs' key with a list".to_string(),
                ));
            }
        },
        Value::Array(entries) => entries,
        _ => {
            return Err(BatchError::Manifest(
                "jobs manifest must be either a list or an object with a 'jobs' list"
                    .to_string(),
            ));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            if !entry.is_object() {
                return Err(BatchError::Manifest(format!(
                    "job entry {} must be an object",
                    i + 1
                )));
            }
            Ok(serde_json::from_value::<RawJob>(entry)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn loads_bare_list() {
        let file = manifest_file(r#"[{"real_dir": "r", "gen_dir": "g"}]"#);
        let jobs = load_raw_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].real_dir.as_deref(), Some("r"));
    }

    #[test]
    fn loads_wrapped_object() {
        let file =
            manifest_file(r#"{"jobs": [{"real_dir": "r", "gen_dir": "g"}]}"#);
        let jobs = load_raw_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 1);
    }

    #[test]
    fn object_without_jobs_key_fails() {
        let file = manifest_file(r#"{"tasks": []}"#);
        match load_raw_jobs(file.path()) {
            Err(BatchError::Manifest(msg)) => assert!(msg.contains("'jobs' key")),
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn jobs_key_must_be_a_list() {
        let file = manifest_file(r#"{"jobs": "nope"}"#);
        match load_raw_jobs(file.path()) {
            Err(BatchError::Manifest(msg)) => {
                assert!(msg.contains("must be a list"));
            }
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn scalar_top_level_fails() {
        let file = manifest_file("42");
        match load_raw_jobs(file.path()) {
            Err(BatchError::Manifest(msg)) => {
                assert!(msg.contains("either a list or an object"));
            }
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn non_object_entry_fails() {
        let file = manifest_file(r#"["not a job"]"#);
        match load_raw_jobs(file.path()) {
            Err(BatchError::Manifest(msg)) => {
                assert!(msg.contains("entry 1"));
            }
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }
}
