// tests/manifest_end_to_end.rs

//! Manifest loading + normalization from real files on disk.

use std::io::Write;
use std::path::Path;

use fidbatch::errors::BatchError;
use fidbatch::manifest::{Backbone, load_jobs};
use tempfile::NamedTempFile;

fn manifest_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_manifest_loads_and_normalizes() {
    let file = manifest_file(
        r#"{
            "jobs": [
                {
                    "name": "baseline",
                    "real_dir": "/data/real",
                    "gen_dir": "/data/gen",
                    "cem_backbones": ["cem500k", "cem1.5m"],
                    "script_args": "--skip-normal",
                    "extra_args": ["--num-workers", "4"]
                },
                {
                    "real_dir": "exp2/real",
                    "gen_dir": "exp2/gen"
                }
            ]
        }"#,
    );

    let jobs = load_jobs(file.path(), None).unwrap();
    assert_eq!(jobs.len(), 2);

    assert_eq!(jobs[0].name, "baseline");
    assert_eq!(jobs[0].backbones, vec![Backbone::Cem500k, Backbone::Cem1_5m]);
    assert_eq!(jobs[0].script_args, vec!["--skip-normal"]);
    assert_eq!(jobs[0].extra_args, vec!["--num-workers", "4"]);

    // Unnamed job synthesizes its name from the raw directory strings.
    assert_eq!(jobs[1].name, "exp2/real -> exp2/gen");
    assert_eq!(jobs[1].backbones, vec![Backbone::Cem500k]);
    // No base directory: relative paths pass through untouched.
    assert_eq!(jobs[1].real_dir, "exp2/real");
}

#[test]
fn one_bad_record_fails_the_whole_manifest() {
    let file = manifest_file(
        r#"[
            {"real_dir": "/r1", "gen_dir": "/g1"},
            {"real_dir": "/r2", "gen_dir": "/g2",
             "cem_backbones": ["cem500k", "cem1.5m"],
             "cem_weights": "/w.pt"}
        ]"#,
    );

    match load_jobs(file.path(), None) {
        Err(BatchError::Job(msg)) => {
            assert!(msg.contains("cem_weights"));
            assert!(msg.contains("separate jobs"));
        }
        other => panic!("expected Job error, got {other:?}"),
    }
}

#[test]
fn unknown_backbone_fails_listing_allowed_identifiers() {
    let file = manifest_file(
        r#"[{"real_dir": "/r", "gen_dir": "/g", "cem_backbones": "inception"}]"#,
    );

    match load_jobs(file.path(), None) {
        Err(BatchError::Job(msg)) => {
            assert!(msg.contains("inception"));
            assert!(msg.contains("cem1.5m, cem500k"));
        }
        other => panic!("expected Job error, got {other:?}"),
    }
}

#[test]
fn relative_paths_resolve_against_jobs_base() {
    let base = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(base.path().join("exp/real")).unwrap();
    std::fs::create_dir_all(base.path().join("exp/gen")).unwrap();

    let file = manifest_file(
        r#"[{"real_dir": "exp/real", "gen_dir": "exp/gen",
             "cem_weights": "exp/weights.pt"}]"#,
    );

    let jobs = load_jobs(file.path(), Some(base.path())).unwrap();
    let job = &jobs[0];

    assert!(Path::new(&job.real_dir).is_absolute());
    assert!(job.real_dir.ends_with("exp/real"));
    assert!(job.gen_dir.ends_with("exp/gen"));
    // Weights file does not exist yet; resolution still anchors it to base.
    let weights = job.cem_weights.as_deref().unwrap();
    assert!(Path::new(weights).is_absolute());
    assert!(weights.ends_with("exp/weights.pt"));
}

#[test]
fn missing_manifest_file_is_an_io_error() {
    match load_jobs("/definitely/not/here.json", None) {
        Err(BatchError::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_a_parse_error() {
    let file = manifest_file("{not json");
    match load_jobs(file.path(), None) {
        Err(BatchError::Json(_)) => {}
        other => panic!("expected Json error, got {other:?}"),
    }
}
