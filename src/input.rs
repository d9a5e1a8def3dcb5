// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading the translation dictionary and string occurrences

use crate::types::{Dictionary, StringWithPath};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn parse_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse_name)
            .ok_or_else(|| anyhow!("unsupported file type: {}", path.display()))
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        match self {
            DataFormat::Json => Ok(serde_json::from_str(content)?),
            DataFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

fn load<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let format = DataFormat::from_path(path)?;
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {} {}", what, path.display()))?;
    format
        .parse(&content)
        .with_context(|| format!("parsing {} {}", what, path.display()))
}

/// Key => `[{lang, translation}, ...]`.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    load(path, "dictionary")
}

/// `[{text, dir}, ...]`.
pub fn load_occurrences(path: &Path) -> Result<Vec<StringWithPath>> {
    load(path, "string list")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dictionary_from_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strings.json");
        fs::write(
            &path,
            r#"{"Hello": [{"lang": "fr", "translation": "Bonjour"}], "World": []}"#,
        )
        .unwrap();
        let dict = load_dictionary(&path).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["Hello"][0].translation, "Bonjour");
        assert!(dict["World"].is_empty());
    }

    #[test]
    fn occurrences_from_yaml_accept_both_field_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("occurrences.yaml");
        fs::write(
            &path,
            "- {text: Hello, dir: src}\n- {text: World, directory: mui}\n",
        )
        .unwrap();
        let occ = load_occurrences(&path).unwrap();
        assert_eq!(occ[0], StringWithPath::new("Hello", "src"));
        assert_eq!(occ[1], StringWithPath::new("World", "mui"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DataFormat::from_path(Path::new("a.YML")).unwrap(),
            DataFormat::Yaml
        );
        assert!(DataFormat::from_path(Path::new("a.txt")).is_err());
        assert!(DataFormat::from_path(Path::new("noext")).is_err());
    }
}
