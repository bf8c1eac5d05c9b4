// src/manifest/model.rs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{BatchError, Result};

/// CEM backbone selecting an evaluation variant.
///
/// The suite script only understands a closed set of identifiers, so the
/// manifest strings are parsed into this enum up front instead of being
/// re-checked at every later use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backbone {
    Cem500k,
    Cem1_5m,
}

impl Backbone {
    /// The identifier as it appears in manifests and on the script command
    /// line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backbone::Cem500k => "cem500k",
            Backbone::Cem1_5m => "cem1.5m",
        }
    }

    /// Allowed identifiers, sorted, for error messages.
    pub fn allowed() -> &'static str {
        "cem1.5m, cem500k"
    }
}

impl Default for Backbone {
    fn default() -> Self {
        Backbone::Cem500k
    }
}

impl FromStr for Backbone {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cem500k" => Ok(Backbone::Cem500k),
            "cem1.5m" => Ok(Backbone::Cem1_5m),
            other => Err(BatchError::Job(format!(
                "unsupported backbone '{other}'. Expected one of {}",
                Backbone::allowed()
            ))),
        }
    }
}

impl fmt::Display for Backbone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job record exactly as it appears in the manifest, before any
/// validation.
///
/// The multi-valued fields (`cem_backbones`, `script_args`, `extra_args`)
/// accept either a single string or a list of strings, so they are kept as
/// raw JSON values here and coerced by [`ensure_list`] during
/// normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawJob {
    pub name: Option<String>,
    pub real_dir: Option<String>,
    pub gen_dir: Option<String>,
    pub cem_backbones: Value,
    pub cem_weights: Option<String>,
    pub script_args: Value,
    pub extra_args: Value,
}

/// One validated unit of work: a REAL/GEN directory pair plus evaluation
/// parameters. Immutable once built; the controller and command builder
/// only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    pub real_dir: String,
    pub gen_dir: String,
    pub backbones: Vec<Backbone>,
    pub cem_weights: Option<String>,
    pub script_args: Vec<String>,
    pub extra_args: Vec<String>,
}

/// Coerce a string-or-list manifest field into a list of strings.
///
/// - `null` (field absent) becomes an empty list.
/// - A bare string becomes a one-element list.
/// - A list must contain only strings.
pub fn ensure_list(value: &Value, field: &str) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => {
            let mut result = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => result.push(s.clone()),
                    _ => {
                        return Err(BatchError::Job(format!(
                            "all items in '{field}' must be strings"
                        )));
                    }
                }
            }
            Ok(result)
        }
        _ => Err(BatchError::Job(format!(
            "field '{field}' must be a string or list of strings"
        ))),
    }
}
