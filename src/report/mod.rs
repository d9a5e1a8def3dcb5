// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run summary: what was generated for each directory

pub mod formatter;
pub mod output;

use crate::storage::OutputStatus;
use crate::types::{DirectoryTranslationSet, LanguageStats};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Outcome for one target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub directory: String,
    pub output_path: PathBuf,
    pub strings: usize,
    pub registry_size: usize,
    pub retained: Vec<String>,
    pub excluded: Vec<String>,
    pub languages: BTreeMap<String, LanguageStats>,
    /// SHA-256 of the rendered file, hex encoded
    pub content_sha256: String,
    pub status: OutputStatus,
}

impl DirectoryReport {
    pub fn new(
        set: &DirectoryTranslationSet,
        output_path: PathBuf,
        content: &str,
        status: OutputStatus,
    ) -> Self {
        let languages = set
            .retained
            .iter()
            .map(|lt| (lt.language.code.clone(), lt.stats.clone()))
            .collect();
        Self {
            directory: set.directory.clone(),
            output_path,
            strings: set.keys.len(),
            registry_size: set.registry_size,
            retained: set.retained_codes(),
            excluded: set.excluded_codes(),
            languages,
            content_sha256: content_digest(content),
            status,
        }
    }

    /// `"<count> out of <total>: <codes>"`
    pub fn incomplete_summary(&self) -> String {
        format!(
            "{} out of {}: {}",
            self.excluded.len(),
            self.registry_size,
            self.excluded.join(", ")
        )
    }
}

/// Outcome of a whole run, in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub directories: Vec<DirectoryReport>,
}

impl GenerationReport {
    pub fn all_up_to_date(&self) -> bool {
        self.directories.iter().all(|d| d.status.is_up_to_date())
    }

    pub fn out_of_date(&self) -> Vec<&DirectoryReport> {
        self.directories
            .iter()
            .filter(|d| !d.status.is_up_to_date())
            .collect()
    }
}

pub fn content_digest(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Save the summary, format picked from the file extension.
pub fn save_report<P: AsRef<Path>>(report: &GenerationReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ReportOutputFormat::parse)
        .unwrap_or(ReportOutputFormat::Json);
    let content = format.serialize(report)?;
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

/// Print the per-directory summary to stdout.
pub fn print_report(report: &GenerationReport) {
    let formatter = ReportFormatter::new();
    formatter.print(report);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirectoryReport {
        DirectoryReport {
            directory: "src".into(),
            output_path: PathBuf::from("src/Trans_sumatra_txt.cpp"),
            strings: 2,
            registry_size: 5,
            retained: vec!["en".into(), "fr".into()],
            excluded: vec!["de".into(), "ja".into()],
            languages: BTreeMap::new(),
            content_sha256: content_digest(""),
            status: OutputStatus::Written,
        }
    }

    #[test]
    fn incomplete_summary_format() {
        assert_eq!(sample().incomplete_summary(), "2 out of 5: de, ja");
    }

    #[test]
    fn digest_is_sha256_hex() {
        assert_eq!(
            content_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn stale_directories_are_out_of_date() {
        let mut stale = sample();
        stale.status = OutputStatus::Stale;
        let report = GenerationReport {
            directories: vec![sample(), stale],
        };
        assert!(!report.all_up_to_date());
        assert_eq!(report.out_of_date().len(), 1);
    }
}
