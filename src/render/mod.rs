// SPDX-License-Identifier: PMPL-1.0-or-later

//! Template rendering and output naming
//!
//! Rendering is plain placeholder substitution. All decisions were made by
//! the builder; nothing here looks at languages or keys.

mod templates;

pub use templates::{COMPACT_TMPL, TRANSLATIONS_TMPL};

use crate::builder::RenderModel;
use crate::config::GenConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fill `{{Name}}` placeholders in one left-to-right pass, so substituted
/// values are never scanned for placeholders themselves. Unknown names are
/// left in place.
pub fn fill_template(tmpl: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(tmpl.len() + extra);
    let mut rest = tmpl;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match values.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// The per-language arrays and `GetTranslationsForLang()`.
pub fn render_translations(model: &RenderModel) -> String {
    fill_template(
        TRANSLATIONS_TMPL,
        &[
            ("Translations", model.translations.as_str()),
            ("TranslationsRefs", model.translations_refs.as_str()),
        ],
    )
}

/// The complete generated source file.
pub fn render(model: &RenderModel, config: &GenConfig) -> String {
    let translations = render_translations(model);
    debug!(bytes = translations.len(), "rendered translations");
    let langs_count = model.langs_count.to_string();
    let strings_count = model.strings_count.to_string();
    fill_template(
        COMPACT_TMPL,
        &[
            ("HeaderInclude", config.header_include.as_str()),
            ("Namespace", config.namespace.as_str()),
            ("LangsCount", langs_count.as_str()),
            ("StringsCount", strings_count.as_str()),
            ("OriginalStrings", model.original_strings.as_str()),
            ("Translations", translations.as_str()),
            ("LangCodes", model.lang_codes.as_str()),
            ("LangNames", model.lang_names.as_str()),
            ("LangIds", model.lang_ids.as_str()),
            ("IsLangRtl", model.is_lang_rtl.as_str()),
        ],
    )
}

/// `Trans_<suffix>_txt.<ext>` where suffix is the directory with the source
/// root stripped. The source root itself maps to `default_name`.
pub fn file_name_from_dir_name(dir: &str, config: &GenConfig) -> String {
    let normalized = dir.replace('\\', "/");
    let path = Path::new(&normalized);
    let stripped = path
        .strip_prefix(&config.source_root)
        .unwrap_or(path)
        .to_string_lossy();
    let joined = stripped.trim_matches('/').replace('/', "_");
    let suffix = if joined.is_empty() || joined == "." {
        config.default_name.as_str()
    } else {
        joined.as_str()
    };
    format!("Trans_{}_txt.{}", suffix, config.extension)
}

/// Where the generated file for `dir` is written.
pub fn output_path(dir: &str, config: &GenConfig) -> PathBuf {
    config
        .output_root
        .join(dir)
        .join(file_name_from_dir_name(dir, config))
}
