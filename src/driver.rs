// SPDX-License-Identifier: PMPL-1.0-or-later

//! Driver: generate one translation file per configured directory
//!
//! Directories are processed in configured order. The first fatal error
//! stops the run; files already written for earlier directories stay.

use crate::builder::build_directory_tables;
use crate::config::GenConfig;
use crate::registry::load_registry;
use crate::render::{file_name_from_dir_name, output_path, render};
use crate::report::{DirectoryReport, GenerationReport};
use crate::storage::{persist_generated, StorageMode};
use crate::types::{Dictionary, Language, StringWithPath};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Build, render and persist the file for one directory.
pub fn generate_directory(
    dict: &Dictionary,
    registry: &[Language],
    occurrences: &[StringWithPath],
    directory: &str,
    config: &GenConfig,
    mode: StorageMode,
) -> Result<DirectoryReport> {
    let tables = build_directory_tables(dict, registry, directory, occurrences)
        .with_context(|| format!("building tables for {:?}", directory))?;
    let content = render(&tables.model, config);
    let path = output_path(directory, config);
    debug!(path = %path.display(), bytes = content.len(), "file content");

    let status = persist_generated(&path, &content, mode)?;
    let report = DirectoryReport::new(&tables.set, path, &content, status);
    info!(
        "Incomplete langs in {}: {}",
        file_name_from_dir_name(directory, config),
        report.incomplete_summary()
    );
    Ok(report)
}

/// Generate every configured directory.
pub fn generate_all(
    dict: &Dictionary,
    occurrences: &[StringWithPath],
    config: &GenConfig,
    mode: StorageMode,
) -> Result<GenerationReport> {
    let registry =
        load_registry(&config.language_descriptors()).context("invalid language registry")?;
    info!(
        languages = registry.len(),
        directories = config.directories.len(),
        "generating translations"
    );

    let mut report = GenerationReport::default();
    for directory in &config.directories {
        report.directories.push(generate_directory(
            dict,
            &registry,
            occurrences,
            directory,
            config,
            mode,
        )?);
    }
    Ok(report)
}
