// SPDX-License-Identifier: PMPL-1.0-or-later

//! Completeness filter
//!
//! Decides, per directory, which languages have enough translations to be
//! shipped. A language missing more than [`INCOMPLETE_MISSING_PERCENT`] of a
//! directory's keys is left out of that directory's tables entirely.

use crate::error::{GenError, GenResult};
use crate::types::{Dictionary, Language, LanguageStats};

/// Percentage of missing translations above which a language counts as
/// incomplete for a directory.
pub const INCOMPLETE_MISSING_PERCENT: usize = 20;

/// Outcome of translating one directory's keys into one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    /// One translation per key; empty where missing or identical to the key
    Complete {
        translations: Vec<String>,
        stats: LanguageStats,
    },
    Incomplete { missing: usize, total: usize },
}

impl Completeness {
    pub fn is_complete(&self) -> bool {
        matches!(self, Completeness::Complete { .. })
    }
}

/// `missing` out of `total` is over the threshold. Strictly greater: a
/// language missing exactly 20% is kept.
pub fn exceeds_threshold(missing: usize, total: usize) -> bool {
    missing * 100 > total * INCOMPLETE_MISSING_PERCENT
}

/// Look up every key in `lang`.
///
/// The default language translates to the keys themselves. A key with more
/// than one record for the language is a broken dictionary and aborts.
pub fn translate_for_language(
    dict: &Dictionary,
    keys: &[String],
    lang: &Language,
) -> GenResult<Completeness> {
    if lang.is_default() {
        let stats = LanguageStats {
            translated: keys.len(),
            blob_bytes: keys.iter().map(|k| k.len() + 1).sum(),
            ..LanguageStats::default()
        };
        return Ok(Completeness::Complete {
            translations: keys.to_vec(),
            stats,
        });
    }

    let mut translations = Vec::with_capacity(keys.len());
    let mut stats = LanguageStats::default();
    for key in keys {
        let found: Vec<&str> = dict
            .get(key)
            .into_iter()
            .flatten()
            .filter(|rec| rec.lang == lang.code)
            .map(|rec| rec.translation.as_str())
            .collect();
        match found.as_slice() {
            [] => {
                stats.missing += 1;
                translations.push(String::new());
            }
            [t] if *t == key.as_str() => {
                stats.translated += 1;
                stats.same_as_key += 1;
                translations.push(String::new());
            }
            [t] => {
                stats.translated += 1;
                translations.push(t.to_string());
            }
            many => {
                return Err(GenError::AmbiguousTranslation {
                    key: key.clone(),
                    lang: lang.code.clone(),
                    count: many.len(),
                })
            }
        }
    }

    if exceeds_threshold(stats.missing, keys.len()) {
        return Ok(Completeness::Incomplete {
            missing: stats.missing,
            total: keys.len(),
        });
    }
    stats.blob_bytes = translations.iter().map(|t| t.len() + 1).sum();
    Ok(Completeness::Complete {
        translations,
        stats,
    })
}
