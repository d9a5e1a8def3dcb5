// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language registry.
//!
//! Turns raw `[code, name, platform_id]` / `[code, name, platform_id, "RTL"]`
//! tuples into [`Language`] values and enforces the registry invariants:
//!
//! - every descriptor has 3 or 4 elements and a 4th element is `"RTL"`
//! - codes are unique and exactly one of them is `"en"`
//! - exactly [`EXPECTED_RTL_LANGS`] languages are right-to-left
//!
//! The registry itself is never mutated by table building; each directory
//! run works on its own sorted copy.

mod builtin;

pub use builtin::{builtin_descriptors, BUILTIN_LANGUAGES};

use crate::error::{GenError, GenResult};
use crate::types::{Language, DEFAULT_LANG, RTL_MARKER};
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Number of right-to-left languages the registry must contain.
///
/// Anything else means the registry drifted from the list the consuming
/// application was written against.
pub const EXPECTED_RTL_LANGS: usize = 4;

fn non_identifier_chars() -> GenResult<&'static Regex> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]"))
        .as_ref()
        .map_err(|e| GenError::InvalidPattern(e.to_string()))
}

/// `code` with every character that can't appear in a C identifier
/// replaced by `_`: "ca-xv" => "ca_xv".
pub fn code_safe(code: &str) -> GenResult<String> {
    Ok(non_identifier_chars()?
        .replace_all(code, "_")
        .into_owned())
}

impl Language {
    /// Build a language from one raw registry descriptor.
    pub fn from_descriptor(desc: &[String]) -> GenResult<Self> {
        if desc.len() != 3 && desc.len() != 4 {
            return Err(GenError::MalformedDescriptor {
                descriptor: desc.to_vec(),
                len: desc.len(),
            });
        }
        let is_rtl = match desc.get(3) {
            None => false,
            Some(marker) if marker == RTL_MARKER => true,
            Some(marker) => {
                return Err(GenError::InvalidRtlMarker {
                    descriptor: desc.to_vec(),
                    marker: marker.clone(),
                })
            }
        };
        Ok(Language {
            code: desc[0].clone(),
            name: desc[1].clone(),
            platform_id: desc[2].clone(),
            is_rtl,
            code_safe: code_safe(&desc[0])?,
        })
    }
}

/// Construct language objects from raw descriptors, keeping their order.
pub fn build_languages(raw: &[Vec<String>]) -> GenResult<Vec<Language>> {
    let mut seen = HashSet::new();
    let mut langs = Vec::with_capacity(raw.len());
    for desc in raw {
        let lang = Language::from_descriptor(desc)?;
        if !seen.insert(lang.code.clone()) {
            return Err(GenError::DuplicateLanguageCode(lang.code));
        }
        langs.push(lang);
    }
    Ok(langs)
}

/// Check the registry-wide invariants that don't depend on a directory.
pub fn validate_registry(langs: &[Language]) -> GenResult<()> {
    if !langs.iter().any(Language::is_default) {
        return Err(GenError::MissingDefaultLanguage);
    }
    let rtl = langs.iter().filter(|l| l.is_rtl).count();
    if rtl != EXPECTED_RTL_LANGS {
        return Err(GenError::RtlCountMismatch {
            expected: EXPECTED_RTL_LANGS,
            found: rtl,
        });
    }
    Ok(())
}

fn builder_order(a: &Language, b: &Language) -> Ordering {
    match (a.is_default(), b.is_default()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}

/// Sort so that "en" comes first and the rest follow by display name.
///
/// Fails if the first entry afterwards is not "en", i.e. the list has no
/// default language at all.
pub fn sort_languages(langs: &mut [Language]) -> GenResult<()> {
    langs.sort_by(builder_order);
    match langs.first() {
        Some(first) if first.code == DEFAULT_LANG => Ok(()),
        Some(first) => Err(GenError::DefaultLanguageNotFirst(first.code.clone())),
        None => Err(GenError::MissingDefaultLanguage),
    }
}

/// Build, validate and sort a registry in one go.
pub fn load_registry(raw: &[Vec<String>]) -> GenResult<Vec<Language>> {
    let mut langs = build_languages(raw)?;
    validate_registry(&langs)?;
    sort_languages(&mut langs)?;
    Ok(langs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn three_element_descriptor_is_ltr() {
        let lang = Language::from_descriptor(&desc(&["af", "Afrikaans", "X"])).unwrap();
        assert_eq!(lang.code, "af");
        assert_eq!(lang.name, "Afrikaans");
        assert_eq!(lang.platform_id, "X");
        assert!(!lang.is_rtl);
    }

    #[test]
    fn rtl_marker_sets_flag() {
        let lang = Language::from_descriptor(&desc(&["he", "Hebrew", "X", "RTL"])).unwrap();
        assert!(lang.is_rtl);
    }

    #[test]
    fn bad_arity_is_rejected() {
        let err = Language::from_descriptor(&desc(&["af", "Afrikaans"])).unwrap_err();
        assert!(matches!(err, GenError::MalformedDescriptor { len: 2, .. }));
        let err = Language::from_descriptor(&desc(&["a", "b", "c", "RTL", "e"])).unwrap_err();
        assert!(matches!(err, GenError::MalformedDescriptor { len: 5, .. }));
    }

    #[test]
    fn bad_rtl_marker_is_rejected() {
        let err = Language::from_descriptor(&desc(&["he", "Hebrew", "X", "rtl"])).unwrap_err();
        assert!(matches!(err, GenError::InvalidRtlMarker { .. }));
    }

    #[test]
    fn code_safe_replaces_dashes() {
        assert_eq!(code_safe("ca-xv").unwrap(), "ca_xv");
        assert_eq!(code_safe("sr-rs").unwrap(), "sr_rs");
        assert_eq!(code_safe("en").unwrap(), "en");
        assert_eq!(code_safe("pt.br@x").unwrap(), "pt_br_x");
        let lang = Language::from_descriptor(&desc(&["ca-xv", "Valencian", "X"])).unwrap();
        assert_eq!(lang.translations_array_name(), "gTranslations_ca_xv");
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let raw = vec![desc(&["en", "English", "X"]), desc(&["en", "Other", "Y"])];
        assert_eq!(
            build_languages(&raw).unwrap_err(),
            GenError::DuplicateLanguageCode("en".into())
        );
    }

    #[test]
    fn sort_puts_english_first_then_by_name() {
        let raw = vec![
            desc(&["fr", "French", "X"]),
            desc(&["de", "German", "X"]),
            desc(&["af", "Afrikaans", "X"]),
            desc(&["en", "English", "X"]),
        ];
        let mut langs = build_languages(&raw).unwrap();
        sort_languages(&mut langs).unwrap();
        let codes: Vec<_> = langs.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "af", "fr", "de"]);
    }

    #[test]
    fn sort_without_english_fails() {
        let mut langs = build_languages(&[desc(&["fr", "French", "X"])]).unwrap();
        assert_eq!(
            sort_languages(&mut langs).unwrap_err(),
            GenError::DefaultLanguageNotFirst("fr".into())
        );
    }

    #[test]
    fn rtl_count_must_be_exactly_four() {
        let raw = vec![
            desc(&["en", "English", "X"]),
            desc(&["ar", "Arabic", "X", "RTL"]),
        ];
        let langs = build_languages(&raw).unwrap();
        assert_eq!(
            validate_registry(&langs).unwrap_err(),
            GenError::RtlCountMismatch {
                expected: 4,
                found: 1
            }
        );
    }

    #[test]
    fn builtin_registry_loads() {
        let langs = load_registry(&builtin_descriptors()).unwrap();
        assert_eq!(langs[0].code, "en");
        assert_eq!(langs.len(), BUILTIN_LANGUAGES.len());
        for pair in langs[1..].windows(2) {
            assert!(pair[0].name < pair[1].name);
        }
    }
}
