// src/bin/check_png.rs

//! Standalone utility to detect unreadable PNG files inside a directory
//! tree. Independent of the batch runner; shares no state with it.
//!
//! Exit codes: 0 = all PNGs decoded (or none found), 1 = bad directory
//! argument, 2 = at least one corrupted file detected.

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

#[derive(Debug, Parser)]
#[command(
    name = "check-png",
    version,
    about = "Scan a directory (recursively) for PNG files that cannot be \
             decoded and report their paths."
)]
struct Args {
    /// Path to the directory containing PNG files.
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Disable the progress bar.
    #[arg(long)]
    no_progress: bool,
}

fn main() {
    let args = Args::parse();
    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let root = &args.directory;
    if !root.exists() {
        eprintln!("Path does not exist: {}", root.display());
        return 1;
    }
    if root.is_file() {
        eprintln!("Expected a directory, but got a file: {}", root.display());
        return 1;
    }

    let png_files = collect_pngs(root);
    if png_files.is_empty() {
        println!("No PNG files found under {}", root.display());
        return 0;
    }

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(png_files.len() as u64).with_style(
            ProgressStyle::with_template(
                "Checking PNGs {bar:40.cyan/blue} {pos}/{len} files",
            )
            .expect("valid progress template"),
        )
    };

    let mut corrupted = 0usize;
    for path in &png_files {
        // A full decode, not just a header check; truncated files often
        // carry a valid header.
        if let Err(err) = image::open(path) {
            progress.suspend(|| println!("[CORRUPTED] {} -> {err}", path.display()));
            corrupted += 1;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if corrupted > 0 {
        println!();
        println!("Detected {corrupted} corrupted PNG file(s).");
        2
    } else {
        println!("All {} PNG file(s) opened successfully.", png_files.len());
        0
    }
}

fn collect_pngs(root: &std::path::Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect()
}
