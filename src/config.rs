// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator configuration
//!
//! Read from a YAML or JSON file (picked by extension). Every field has a
//! default, so an empty file or no file at all is a valid configuration.

use crate::input::DataFormat;
use crate::registry::builtin_descriptors;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Raw language descriptors; the built-in registry when absent
    pub languages: Option<Vec<Vec<String>>>,
    /// Target directories, processed in this order
    pub directories: Vec<String>,
    /// Prefix stripped from a directory name to form the output file name
    pub source_root: String,
    /// File name stem used for the source root itself
    pub default_name: String,
    pub extension: String,
    /// Directory the target directories are resolved against
    pub output_root: PathBuf,
    pub header_include: String,
    pub namespace: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            languages: None,
            directories: vec!["src".to_string()],
            source_root: "src".to_string(),
            default_name: "sumatra".to_string(),
            extension: "cpp".to_string(),
            output_root: PathBuf::from("."),
            header_include: "utils/BaseUtil.h".to_string(),
            namespace: "trans".to_string(),
        }
    }
}

impl GenConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let format = DataFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        format
            .parse(&content)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Descriptors to build the registry from.
    pub fn language_descriptors(&self) -> Vec<Vec<String>> {
        self.languages.clone().unwrap_or_else(builtin_descriptors)
    }
}
