// src/exec/command.rs

//! Command construction for the suite script.
//!
//! The argument order is a compatibility contract with the script's own
//! parser and must not change:
//!
//! ```text
//! script REAL_DIR GEN_DIR [--cem-backbone B]... [--cem-weights PATH]
//!        [script_args...] [-- extra_args... global_extra...]
//! ```

use crate::manifest::Job;

/// Build the exact argument vector for one job.
///
/// Pure function of the job and the batch-global passthrough arguments.
/// Job-level `extra_args` precede the global ones; the `--` separator is
/// only emitted when there is at least one combined extra argument.
pub fn build_command(script: &str, job: &Job, global_extra: &[String]) -> Vec<String> {
    let mut cmd: Vec<String> = vec![
        script.to_string(),
        job.real_dir.clone(),
        job.gen_dir.clone(),
    ];

    for backbone in &job.backbones {
        cmd.push("--cem-backbone".to_string());
        cmd.push(backbone.as_str().to_string());
    }

    if let Some(weights) = &job.cem_weights {
        cmd.push("--cem-weights".to_string());
        cmd.push(weights.clone());
    }

    cmd.extend(job.script_args.iter().cloned());

    if !job.extra_args.is_empty() || !global_extra.is_empty() {
        cmd.push("--".to_string());
        cmd.extend(job.extra_args.iter().cloned());
        cmd.extend(global_extra.iter().cloned());
    }

    cmd
}

/// Render a command for display, quoting tokens POSIX-shell style so the
/// echoed line can be copy-pasted.
pub fn render_command(cmd: &[String]) -> String {
    cmd.iter()
        .map(|part| quote(part))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(token: &str) -> String {
    if !token.is_empty() && token.chars().all(is_safe_char) {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', "'\"'\"'"))
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '_' | '-')
}
