// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writing generated files, or checking them against what's on disk

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Write outputs whose content changed
    Write,
    /// Compare only, never touch the filesystem
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStatus {
    /// New content was written
    Written,
    /// File on disk already matches
    Unchanged,
    /// Check mode: file on disk differs
    Stale,
    /// Check mode: no file on disk
    Missing,
}

impl OutputStatus {
    pub fn is_up_to_date(self) -> bool {
        matches!(self, OutputStatus::Written | OutputStatus::Unchanged)
    }
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
    }
}

/// Persist one generated file according to `mode`.
///
/// Identical content is never rewritten, so file timestamps only move when
/// the tables actually change.
pub fn persist_generated(path: &Path, content: &str, mode: StorageMode) -> Result<OutputStatus> {
    let existing = read_existing(path)?;
    if existing.as_deref() == Some(content) {
        return Ok(OutputStatus::Unchanged);
    }
    match mode {
        StorageMode::Check if existing.is_some() => Ok(OutputStatus::Stale),
        StorageMode::Check => Ok(OutputStatus::Missing),
        StorageMode::Write => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
            Ok(OutputStatus::Written)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src/Trans_sumatra_txt.cpp");
        assert_eq!(
            persist_generated(&path, "abc", StorageMode::Write).unwrap(),
            OutputStatus::Written
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
        assert_eq!(
            persist_generated(&path, "abc", StorageMode::Write).unwrap(),
            OutputStatus::Unchanged
        );
    }

    #[test]
    fn check_never_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.cpp");
        assert_eq!(
            persist_generated(&path, "abc", StorageMode::Check).unwrap(),
            OutputStatus::Missing
        );
        assert!(!path.exists());
        fs::write(&path, "old").unwrap();
        assert_eq!(
            persist_generated(&path, "abc", StorageMode::Check).unwrap(),
            OutputStatus::Stale
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }
}
