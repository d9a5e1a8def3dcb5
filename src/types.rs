// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for trans-gen
//!
//! Inputs are the language registry, the translation dictionary and the
//! list of string occurrences. Everything the builder produces for one
//! directory lives in a [`DirectoryTranslationSet`], so nothing carries
//! over from one directory to the next.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Code of the default language. Its "translations" are the keys themselves.
pub const DEFAULT_LANG: &str = "en";

/// Marker accepted as the 4th element of a language descriptor.
pub const RTL_MARKER: &str = "RTL";

/// One supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Short locale identifier, e.g. "af" or "ca-xv"
    pub code: String,
    /// Display name, e.g. "Afrikaans"
    pub name: String,
    /// Platform language id expression, emitted verbatim
    pub platform_id: String,
    pub is_rtl: bool,
    /// `code` usable inside a C identifier ("ca-xv" => "ca_xv")
    pub code_safe: String,
}

impl Language {
    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_LANG
    }

    /// Name of the generated per-language data array.
    pub fn translations_array_name(&self) -> String {
        format!("gTranslations_{}", self.code_safe)
    }
}

/// A single `{lang, translation}` entry of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub lang: String,
    pub translation: String,
}

impl TranslationRecord {
    pub fn new(lang: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            translation: translation.into(),
        }
    }
}

/// Source string => all known translations of it.
pub type Dictionary = BTreeMap<String, Vec<TranslationRecord>>;

/// One occurrence of a translatable string in the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringWithPath {
    pub text: String,
    #[serde(rename = "dir", alias = "directory")]
    pub directory: String,
}

impl StringWithPath {
    pub fn new(text: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            directory: directory.into(),
        }
    }
}

/// Counters gathered while building one language's table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub translated: usize,
    pub missing: usize,
    /// Translations identical to their key, emitted as empty strings
    pub same_as_key: usize,
    /// Byte length of the plain `translation + "\0"` concatenation
    pub blob_bytes: usize,
}

/// Translations of one retained language for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTranslations {
    pub language: Language,
    /// One entry per key, in key order
    pub translations: Vec<String>,
    pub stats: LanguageStats,
}

/// Everything computed for one directory: which languages survived the
/// completeness check, with their translations, and which were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTranslationSet {
    pub directory: String,
    pub keys: Vec<String>,
    /// Default language first, then by display name
    pub retained: Vec<LanguageTranslations>,
    pub excluded: Vec<Language>,
    /// Size of the registry the set was computed from
    pub registry_size: usize,
}

impl DirectoryTranslationSet {
    pub fn retained_codes(&self) -> Vec<String> {
        self.retained
            .iter()
            .map(|lt| lt.language.code.clone())
            .collect()
    }

    pub fn excluded_codes(&self) -> Vec<String> {
        self.excluded.iter().map(|l| l.code.clone()).collect()
    }
}
