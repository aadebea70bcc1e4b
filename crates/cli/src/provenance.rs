//! Provenance records for mask files.
//!
//! `classify` writes `<mask>.provenance.json` next to every mask so a consumer
//! can tell which polygon and point set produced it without rerunning the CLI.

use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One CSV input and the number of coordinate rows read from it.
#[derive(Debug, Serialize, PartialEq)]
pub struct InputFile {
    pub path: String,
    pub rows: usize,
    /// Size on disk; `None` when the file could not be stat'ed after reading.
    pub bytes: Option<u64>,
}

impl InputFile {
    pub fn describe(path: &str, rows: usize) -> Self {
        Self {
            path: path.to_string(),
            rows,
            bytes: fs::metadata(path).ok().map(|m| m.len()),
        }
    }
}

/// Everything needed to reproduce or audit one `classify` run.
#[derive(Debug, Serialize)]
pub struct MaskProvenance<'a, S: Serialize> {
    pub code_rev: String,
    pub crate_version: &'static str,
    pub polygon: InputFile,
    pub points: InputFile,
    pub parallel_min: usize,
    pub parallel_enabled: bool,
    pub summary: &'a S,
    pub mask: String,
}

/// Sidecar location: the mask's file name with `.provenance.json` appended.
pub fn sidecar_path(mask: &Path) -> PathBuf {
    let mut name = mask
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("mask"));
    name.push(".provenance.json");
    mask.with_file_name(name)
}

/// Write the record next to `mask` and return the sidecar path.
pub fn write_sidecar<S: Serialize>(
    mask: &Path,
    record: &MaskProvenance<'_, S>,
) -> Result<PathBuf> {
    let path = sidecar_path(mask);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time) or `git rev-parse`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            output
                .status
                .success()
                .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
