// SPDX-License-Identifier: PMPL-1.0-or-later

//! Table builder
//!
//! For one target directory: pick the directory's keys, run the completeness
//! filter for every registry language, and precompute every textual table
//! the renderer pastes into the templates.

use crate::error::{GenError, GenResult};
use crate::escape::{escape_concatenable, escape_standalone};
use crate::filter::{translate_for_language, Completeness};
use crate::registry::{sort_languages, validate_registry};
use crate::types::{
    Dictionary, DirectoryTranslationSet, Language, LanguageTranslations, StringWithPath,
};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Pre-rendered tables for one directory. Every field is pasted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub langs_count: usize,
    pub strings_count: usize,
    pub original_strings: String,
    /// `const char * gTranslations_xx = ...;` definitions, default language excluded
    pub translations: String,
    /// Entries of `gTranslations[]`, `NULL` in the default language's slot
    pub translations_refs: String,
    pub lang_codes: String,
    pub lang_names: String,
    pub lang_ids: String,
    /// Body of `IsLangRtl()`
    pub is_lang_rtl: String,
}

/// Result of building one directory.
#[derive(Debug, Clone)]
pub struct DirectoryTables {
    pub set: DirectoryTranslationSet,
    pub model: RenderModel,
}

/// `true` when an occurrence recorded under `occurrence_dir` belongs to
/// target directory `directory`. Occurrences carry either the full path or
/// just the last component ("mui" for "src/mui").
pub fn belongs_to(occurrence_dir: &str, directory: &str) -> bool {
    if occurrence_dir == directory {
        return true;
    }
    Path::new(directory)
        .file_name()
        .map(|base| base.to_string_lossy() == occurrence_dir)
        .unwrap_or(false)
}

/// Keys are ordered as if literal `\t` escapes were real tabs.
fn sort_key(key: &str) -> String {
    key.replace("\\t", "\t")
}

/// Distinct texts used in `directory` that the dictionary knows about,
/// sorted.
pub fn directory_keys(
    dict: &Dictionary,
    occurrences: &[StringWithPath],
    directory: &str,
) -> Vec<String> {
    let unique: BTreeSet<&str> = occurrences
        .iter()
        .filter(|occ| belongs_to(&occ.directory, directory))
        .filter(|occ| dict.contains_key(&occ.text))
        .map(|occ| occ.text.as_str())
        .collect();
    let mut keys: Vec<String> = unique.into_iter().map(str::to_string).collect();
    keys.sort_by_cached_key(|k| sort_key(k));
    keys
}

/// Take `code` out of the working list.
pub fn remove_language(working: &mut Vec<Language>, code: &str) -> GenResult<Language> {
    let idx = working
        .iter()
        .position(|l| l.code == code)
        .ok_or_else(|| GenError::LanguageNotInWorkingList(code.to_string()))?;
    Ok(working.remove(idx))
}

/// Run the completeness filter for every language against `keys`.
///
/// The registry is only read; the returned set is specific to `directory`.
pub fn build_translation_set(
    dict: &Dictionary,
    registry: &[Language],
    directory: &str,
    keys: Vec<String>,
) -> GenResult<DirectoryTranslationSet> {
    let mut working = registry.to_vec();
    sort_languages(&mut working)?;

    let mut complete = Vec::new();
    let mut incomplete = Vec::new();
    for lang in &working {
        match translate_for_language(dict, &keys, lang)? {
            Completeness::Complete {
                translations,
                stats,
            } => complete.push((lang.code.clone(), translations, stats)),
            Completeness::Incomplete { missing, total } => {
                debug!(lang = %lang.code, missing, total, "incomplete");
                incomplete.push(lang.code.clone());
            }
        }
    }
    info!(directory, incomplete = incomplete.len(), "incomplete languages");

    let mut excluded = Vec::with_capacity(incomplete.len());
    for code in &incomplete {
        excluded.push(remove_language(&mut working, code)?);
    }

    let mut retained = Vec::with_capacity(working.len());
    for (lang, (code, translations, stats)) in working.into_iter().zip(complete) {
        debug_assert_eq!(lang.code, code);
        retained.push(LanguageTranslations {
            language: lang,
            translations,
            stats,
        });
    }
    info!(
        directory,
        langs = retained.len(),
        registry = registry.len(),
        "retained languages"
    );

    Ok(DirectoryTranslationSet {
        directory: directory.to_string(),
        keys,
        retained,
        excluded,
        registry_size: registry.len(),
    })
}

fn indented<I, S>(items: I, sep: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| format!("  {}", s.as_ref()))
        .collect::<Vec<_>>()
        .join(sep)
}

/// `const char * gTranslations_xx = "..\0" \ ... ;` for one language.
fn translation_array(lt: &LanguageTranslations) -> String {
    let body = indented(lt.translations.iter().map(|t| escape_concatenable(t)), "\\\n");
    format!(
        "const char * {} = \n{};\n",
        lt.language.translations_array_name(),
        body
    )
}

fn rtl_predicate(retained: &[LanguageTranslations]) -> String {
    let checks: Vec<String> = retained
        .iter()
        .enumerate()
        .filter(|(_, lt)| lt.language.is_rtl)
        .map(|(idx, _)| format!("({} == idx)", idx))
        .collect();
    if checks.is_empty() {
        "return false;".to_string()
    } else {
        format!("return {};", checks.join(" || "))
    }
}

/// Turn a translation set into the textual tables of the generated file.
pub fn build_render_model(set: &DirectoryTranslationSet) -> GenResult<RenderModel> {
    let (default, others) = match set.retained.split_first() {
        Some((first, rest)) if first.language.is_default() => (first, rest),
        Some((first, _)) => {
            return Err(GenError::DefaultLanguageNotFirst(first.language.code.clone()))
        }
        None => return Err(GenError::MissingDefaultLanguage),
    };

    let langs = || set.retained.iter().map(|lt| &lt.language);

    let lang_codes = indented(langs().map(|l| escape_concatenable(&l.code)), " \\\n");
    debug!(bytes = lang_codes.len(), "langcodes");
    let lang_names = indented(langs().map(|l| escape_concatenable(&l.name)), " \\\n");
    debug!(bytes = lang_names.len(), "langnames");
    let lang_ids = indented(langs().map(|l| l.platform_id.as_str()), ",\n");
    debug!(bytes = lang_ids.len(), "langids");

    let is_lang_rtl = rtl_predicate(&set.retained);

    for lt in others {
        debug!(
            lang = %lt.language.code,
            translated = lt.stats.translated,
            missing = lt.stats.missing,
            same_as_key = lt.stats.same_as_key,
            blob_bytes = lt.stats.blob_bytes,
            "language table"
        );
    }

    let refs = indented(
        others.iter().map(|lt| lt.language.translations_array_name()),
        ", \n",
    );
    let translations_refs = format!("  NULL,\n{}", refs);
    debug!(bytes = translations_refs.len(), "translations_refs");

    let translations = others
        .iter()
        .map(translation_array)
        .collect::<Vec<_>>()
        .join("\n");
    debug!(bytes = translations.len(), "translations");

    let original_strings = indented(
        default.translations.iter().map(|k| escape_standalone(k)),
        ",\n",
    );
    debug!(bytes = original_strings.len(), "original_strings");

    Ok(RenderModel {
        langs_count: set.retained.len(),
        strings_count: set.keys.len(),
        original_strings,
        translations,
        translations_refs,
        lang_codes,
        lang_names,
        lang_ids,
        is_lang_rtl,
    })
}

/// Everything for one directory: keys, completeness, tables.
///
/// Fails when the registry breaks its invariants or when the directory has
/// no dictionary strings, since a zero-length `gOriginalStrings` array is
/// not valid C++.
pub fn build_directory_tables(
    dict: &Dictionary,
    registry: &[Language],
    directory: &str,
    occurrences: &[StringWithPath],
) -> GenResult<DirectoryTables> {
    validate_registry(registry)?;
    let keys = directory_keys(dict, occurrences, directory);
    if keys.is_empty() {
        return Err(GenError::NoStrings(directory.to_string()));
    }
    info!(
        directory,
        strings = keys.len(),
        dictionary = dict.len(),
        "building tables"
    );
    let set = build_translation_set(dict, registry, directory, keys)?;
    let model = build_render_model(&set)?;
    Ok(DirectoryTables { set, model })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_languages;
    use crate::types::TranslationRecord;

    fn registry() -> Vec<Language> {
        let raw: Vec<Vec<String>> = [
            vec!["fr", "French", "_LANGID(LANG_FRENCH)"],
            vec!["en", "English", "_LANGID(LANG_ENGLISH)"],
            vec!["ar", "Arabic", "_LANGID(LANG_ARABIC)", "RTL"],
            vec!["he", "Hebrew", "_LANGID(LANG_HEBREW)", "RTL"],
            vec!["de", "German", "_LANGID(LANG_GERMAN)"],
            vec!["fa", "Persian", "_LANGID(LANG_FARSI)", "RTL"],
            vec!["ku", "Kurdish", "_LANGID(LANG_CENTRAL_KURDISH)", "RTL"],
        ]
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect();
        build_languages(&raw).unwrap()
    }

    fn dict() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert(
            "Hello".into(),
            vec![
                TranslationRecord::new("fr", "Bonjour"),
                TranslationRecord::new("de", "Hallo"),
                TranslationRecord::new("ar", "مرحبا"),
                TranslationRecord::new("he", "שלום"),
            ],
        );
        dict.insert(
            "World".into(),
            vec![
                TranslationRecord::new("fr", "Monde"),
                TranslationRecord::new("ar", "عالم"),
                TranslationRecord::new("he", "עולם"),
            ],
        );
        dict
    }

    fn occurrences() -> Vec<StringWithPath> {
        vec![
            StringWithPath::new("World", "src"),
            StringWithPath::new("Hello", "src"),
            StringWithPath::new("Hello", "src"),
            StringWithPath::new("Unknown", "src"),
            StringWithPath::new("Hello", "mui"),
        ]
    }

    #[test]
    fn keys_are_deduped_filtered_and_sorted() {
        let keys = directory_keys(&dict(), &occurrences(), "src");
        assert_eq!(keys, vec!["Hello".to_string(), "World".to_string()]);
        let keys = directory_keys(&dict(), &occurrences(), "src/mui");
        assert_eq!(keys, vec!["Hello".to_string()]);
    }

    #[test]
    fn keys_sort_with_tab_escapes_as_tabs() {
        let mut dict = Dictionary::new();
        dict.insert("a\\tb".into(), vec![]);
        dict.insert("a b".into(), vec![]);
        let occ = vec![
            StringWithPath::new("a b", "src"),
            StringWithPath::new("a\\tb", "src"),
        ];
        // '\t' (0x09) sorts before ' ' (0x20), '\\' (0x5c) would not
        assert_eq!(
            directory_keys(&dict, &occ, "src"),
            vec!["a\\tb".to_string(), "a b".to_string()]
        );
    }

    #[test]
    fn incomplete_languages_are_excluded_per_directory() {
        let tables = build_directory_tables(&dict(), &registry(), "src", &occurrences()).unwrap();
        assert_eq!(tables.set.retained_codes(), vec!["en", "ar", "fr", "he"]);
        assert_eq!(tables.set.excluded_codes(), vec!["de", "ku", "fa"]);

        // German has everything "mui" needs
        let tables =
            build_directory_tables(&dict(), &registry(), "src/mui", &occurrences()).unwrap();
        assert_eq!(tables.set.retained_codes(), vec!["en", "ar", "fr", "de", "he"]);
        assert_eq!(tables.set.excluded_codes(), vec!["ku", "fa"]);
    }

    #[test]
    fn render_model_tables() {
        let tables = build_directory_tables(&dict(), &registry(), "src", &occurrences()).unwrap();
        let model = tables.model;
        assert_eq!(model.langs_count, 4);
        assert_eq!(model.strings_count, 2);
        assert_eq!(model.original_strings, "  \"Hello\",\n  \"World\"");
        assert_eq!(
            model.lang_codes,
            "  \"en\\0\" \\\n  \"ar\\0\" \\\n  \"fr\\0\" \\\n  \"he\\0\""
        );
        assert_eq!(
            model.lang_ids,
            "  _LANGID(LANG_ENGLISH),\n  _LANGID(LANG_ARABIC),\n  _LANGID(LANG_FRENCH),\n  _LANGID(LANG_HEBREW)"
        );
        assert_eq!(model.is_lang_rtl, "return (1 == idx) || (3 == idx);");
        assert_eq!(
            model.translations_refs,
            "  NULL,\n  gTranslations_ar, \n  gTranslations_fr, \n  gTranslations_he"
        );
        assert!(model
            .translations
            .contains("const char * gTranslations_fr = \n  \"Bonjour\\0\"\\\n  \"Monde\\0\";\n"));
        assert!(!model.translations.contains("gTranslations_en"));
    }

    #[test]
    fn rtl_predicate_without_rtl_languages_is_false() {
        assert_eq!(rtl_predicate(&[]), "return false;");
    }

    #[test]
    fn remove_language_reports_missing_entry() {
        let mut working = registry();
        assert_eq!(remove_language(&mut working, "fr").unwrap().code, "fr");
        assert_eq!(working.len(), 6);
        assert_eq!(
            remove_language(&mut working, "fr").unwrap_err(),
            GenError::LanguageNotInWorkingList("fr".into())
        );
    }

    #[test]
    fn directory_without_dictionary_strings_is_rejected() {
        let occ = vec![StringWithPath::new("Unknown", "src")];
        assert_eq!(
            build_directory_tables(&dict(), &registry(), "src", &occ).unwrap_err(),
            GenError::NoStrings("src".into())
        );
        assert_eq!(
            build_directory_tables(&Dictionary::new(), &registry(), "src", &occurrences())
                .unwrap_err(),
            GenError::NoStrings("src".into())
        );
    }

    #[test]
    fn registry_drift_is_rejected_by_builder() {
        let mut reg = registry();
        reg.retain(|l| l.code != "ku");
        assert_eq!(
            build_directory_tables(&dict(), &reg, "src", &occurrences()).unwrap_err(),
            GenError::RtlCountMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn registry_is_not_mutated() {
        let reg = registry();
        let before = reg.clone();
        build_directory_tables(&dict(), &reg, "src", &occurrences()).unwrap();
        assert_eq!(reg, before);
    }
}
