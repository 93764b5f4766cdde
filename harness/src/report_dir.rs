//! Report directory persistence: write/read/verify a [`RunReport`] on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_config.json     canonical JSON, the config that produced the report
//!   report.json         canonical JSON, the report body
//!   report_digest.txt   ASCII digest string (e.g. "sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Extra undeclared file → error
//! - Non-canonical `report.json` → error
//! - Stored digest differs from the recomputed one → error
//! - `run_config.json` disagrees with the config inside the report → error
//!
//! [`verify_report_dir`] additionally re-runs the stored config and requires
//! the fresh report to match byte for byte.

use std::collections::BTreeSet;
use std::path::Path;

use statespace_kernel::proof::canon::canonical_json_bytes;
use statespace_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};
use thiserror::Error;
use tracing::debug;

use crate::runner::{run, RunConfig, RunError, RunReport};

const CONFIG_FILENAME: &str = "run_config.json";
const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

const REPORT_FILENAMES: &[&str] = &[CONFIG_FILENAME, REPORT_FILENAME, DIGEST_FILENAME];

/// Error writing a report directory.
#[derive(Debug, Error)]
pub enum ReportDirWriteError {
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("canonical JSON error: {detail}")]
    Canon { detail: String },
}

/// Error reading a report directory.
#[derive(Debug, Error)]
pub enum ReportDirReadError {
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("missing file: {filename}")]
    MissingFile { filename: String },
    #[error("undeclared extra file: {name}")]
    ExtraFile { name: String },
    #[error("{filename} parse error: {detail}")]
    Parse { filename: String, detail: String },
    #[error("{filename} is not in canonical form")]
    NonCanonical { filename: String },
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
    #[error("run_config.json does not match the config recorded in report.json")]
    ConfigMismatch,
}

/// Error verifying a report directory.
#[derive(Debug, Error)]
pub enum ReportDirVerifyError {
    #[error("read error: {0}")]
    Read(#[from] ReportDirReadError),
    #[error("replay failed: {0}")]
    Replay(#[from] RunError),
    #[error("replayed report differs: stored={stored}, replayed={replayed}")]
    ReplayMismatch { stored: String, replayed: String },
}

/// Write `report` to `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`ReportDirWriteError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(report: &RunReport, dir: &Path) -> Result<(), ReportDirWriteError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirWriteError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    let config_value = report
        .config
        .to_json_value()
        .map_err(|e| ReportDirWriteError::Canon {
            detail: e.to_string(),
        })?;
    let config_bytes = canonical_json_bytes(&config_value).map_err(|e| ReportDirWriteError::Canon {
        detail: e.to_string(),
    })?;

    write_atomic(&dir.join(CONFIG_FILENAME), &config_bytes)?;
    write_atomic(&dir.join(REPORT_FILENAME), &report.bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), report.digest.as_str().as_bytes())?;

    debug!(dir = %dir.display(), digest = %report.digest, "report directory written");
    Ok(())
}

/// A report loaded from disk, checked for internal consistency.
#[derive(Debug, Clone)]
pub struct StoredReport {
    pub config: RunConfig,
    pub body: serde_json::Value,
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

/// Read a report directory.
///
/// # Errors
///
/// Returns [`ReportDirReadError`] on any fail-closed check listed in the
/// module docs.
pub fn read_report_dir(dir: &Path) -> Result<StoredReport, ReportDirReadError> {
    let config_bytes = read_required(dir, CONFIG_FILENAME)?;
    let report_bytes = read_required(dir, REPORT_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    for name in list_files(dir)? {
        if !REPORT_FILENAMES.contains(&name.as_str()) {
            return Err(ReportDirReadError::ExtraFile { name });
        }
    }

    let body = parse_canonical(REPORT_FILENAME, &report_bytes)?;
    let config_value = parse_canonical(CONFIG_FILENAME, &config_bytes)?;
    if body.get("config") != Some(&config_value) {
        return Err(ReportDirReadError::ConfigMismatch);
    }
    let config: RunConfig =
        serde_json::from_value(config_value).map_err(|e| ReportDirReadError::Parse {
            filename: CONFIG_FILENAME.to_string(),
            detail: e.to_string(),
        })?;

    let recomputed = canonical_hash(DOMAIN_RUN_REPORT, &report_bytes);
    let stored = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    if recomputed.as_str() != stored {
        return Err(ReportDirReadError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }

    Ok(StoredReport {
        config,
        body,
        bytes: report_bytes,
        digest: recomputed,
    })
}

/// Read a report directory, re-run its config, and require the replayed
/// report to be byte-identical.
///
/// # Errors
///
/// Returns [`ReportDirVerifyError`] on read failure, replay failure, or a
/// differing replay.
pub fn verify_report_dir(dir: &Path) -> Result<StoredReport, ReportDirVerifyError> {
    let stored = read_report_dir(dir)?;
    let replayed = run(&stored.config)?;
    if replayed.bytes != stored.bytes {
        return Err(ReportDirVerifyError::ReplayMismatch {
            stored: stored.digest.as_str().to_string(),
            replayed: replayed.digest.as_str().to_string(),
        });
    }
    Ok(stored)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Write bytes via temp file + rename (best-effort atomicity on Unix).
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirWriteError> {
    let dir = path.parent().ok_or_else(|| ReportDirWriteError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportDirWriteError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirWriteError::Io {
        detail: format!("rename {} → {}: {e}", temp_path.display(), path.display()),
    })?;
    Ok(())
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirReadError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirReadError::MissingFile {
        filename: filename.to_string(),
    })
}

fn parse_canonical(filename: &str, bytes: &[u8]) -> Result<serde_json::Value, ReportDirReadError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ReportDirReadError::Parse {
            filename: filename.to_string(),
            detail: e.to_string(),
        })?;
    let canonical = canonical_json_bytes(&value).map_err(|e| ReportDirReadError::Parse {
        filename: filename.to_string(),
        detail: e.to_string(),
    })?;
    if canonical != bytes {
        return Err(ReportDirReadError::NonCanonical {
            filename: filename.to_string(),
        });
    }
    Ok(value)
}

/// Regular files in `dir`, skipping temp files left by [`write_atomic`].
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirReadError> {
    let io = |e: std::io::Error| ReportDirReadError::Io {
        detail: e.to_string(),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if entry.file_type().map_err(io)?.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with(".tmp_") {
                    files.insert(name.to_string());
                }
            }
        }
    }
    Ok(files)
}
