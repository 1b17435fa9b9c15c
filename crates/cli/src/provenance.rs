//! Provenance records: one JSON document per artifact, plus the `report` block.
//!
//! Every record carries the code revision, crate version, run tag, params and
//! outputs; sidecars add the callsite that produced the artifact.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Run tag and parameters attached to an artifact.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

fn record(tag: Option<String>, params: Value, outputs: Vec<String>) -> Value {
    json!({
        "code_rev": code_rev(),
        "version": nnmesh::VERSION,
        "tag": tag,
        "params": params,
        "outputs": outputs,
    })
}

/// Block printed by `nnmesh report`.
pub fn report_block(tag: Option<String>) -> Value {
    record(tag, json!({}), Vec::new())
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let mut doc = record(
        payload.tag,
        payload.params,
        vec![artifact.to_string_lossy().into_owned()],
    );
    let callsite = Location::caller();
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });

    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Revision baked in at build time (`GIT_COMMIT`), else taken from the environment.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
