// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in language registry.
//!
//! Each row is `[code, display name, platform language id]`, optionally
//! followed by `"RTL"`. The platform id is a Windows `LANGID` expression and
//! is pasted into the generated table as-is.
//!
//! Reference: <https://learn.microsoft.com/en-us/windows/win32/intl/language-identifier-constants-and-strings>

pub const BUILTIN_LANGUAGES: &[&[&str]] = &[
    &["af", "Afrikaans", "_LANGID(LANG_AFRIKAANS)"],
    &["ar", "Arabic (الْعَرَبيّة)", "_LANGID(LANG_ARABIC)", "RTL"],
    &["az", "Azerbaijani (Azərbaycanca)", "_LANGID(LANG_AZERI)"],
    &["bg", "Bulgarian (Български)", "_LANGID(LANG_BULGARIAN)"],
    &["bn", "Bengali (বাংলা)", "_LANGID(LANG_BENGALI)"],
    &["by", "Belarusian (Беларуская)", "_LANGID(LANG_BELARUSIAN)"],
    &["ca", "Catalan (Català)", "_LANGID(LANG_CATALAN)"],
    &["ca-xv", "Catalan-Valencian (Català-Valencià)", "(LANGID)-1"],
    &[
        "cn",
        "Chinese Simplified (简体中文)",
        "MAKELANGID(LANG_CHINESE, SUBLANG_CHINESE_SIMPLIFIED)",
    ],
    &["cy", "Welsh (Cymraeg)", "_LANGID(LANG_WELSH)"],
    &["cz", "Czech (Čeština)", "_LANGID(LANG_CZECH)"],
    &["de", "German (Deutsch)", "_LANGID(LANG_GERMAN)"],
    &["dk", "Danish (Dansk)", "_LANGID(LANG_DANISH)"],
    &["el", "Greek (Ελληνικά)", "_LANGID(LANG_GREEK)"],
    &["en", "English", "_LANGID(LANG_ENGLISH)"],
    &["es", "Spanish (Español)", "_LANGID(LANG_SPANISH)"],
    &["et", "Estonian (Eesti)", "_LANGID(LANG_ESTONIAN)"],
    &["eu", "Basque (Euskara)", "_LANGID(LANG_BASQUE)"],
    &["fa", "Persian (فارسی)", "_LANGID(LANG_FARSI)", "RTL"],
    &["fi", "Finnish (Suomi)", "_LANGID(LANG_FINNISH)"],
    &["fr", "French (Français)", "_LANGID(LANG_FRENCH)"],
    &["ga", "Irish (Gaeilge)", "_LANGID(LANG_IRISH)"],
    &["gl", "Galician (Galego)", "_LANGID(LANG_GALICIAN)"],
    &["he", "Hebrew (עברית)", "_LANGID(LANG_HEBREW)", "RTL"],
    &["hi", "Hindi (हिंदी)", "_LANGID(LANG_HINDI)"],
    &["hr", "Croatian (Hrvatski)", "_LANGID(LANG_CROATIAN)"],
    &["hu", "Hungarian (Magyar)", "_LANGID(LANG_HUNGARIAN)"],
    &["id", "Indonesian (Bahasa Indonesia)", "_LANGID(LANG_INDONESIAN)"],
    &["it", "Italian (Italiano)", "_LANGID(LANG_ITALIAN)"],
    &["ja", "Japanese (日本語)", "_LANGID(LANG_JAPANESE)"],
    &["ka", "Georgian (ქართული)", "_LANGID(LANG_GEORGIAN)"],
    &["kr", "Korean (한국어)", "_LANGID(LANG_KOREAN)"],
    &[
        "ku",
        "Kurdish (كوردی)",
        "MAKELANGID(LANG_CENTRAL_KURDISH, SUBLANG_CENTRAL_KURDISH_CENTRAL_KURDISH_IRAQ)",
        "RTL",
    ],
    &["lt", "Lithuanian (Lietuvių)", "_LANGID(LANG_LITHUANIAN)"],
    &["mk", "Macedonian (македонски)", "_LANGID(LANG_MACEDONIAN)"],
    &["nl", "Dutch (Nederlands)", "_LANGID(LANG_DUTCH)"],
    &[
        "no",
        "Norwegian (Norsk)",
        "MAKELANGID(LANG_NORWEGIAN, SUBLANG_NORWEGIAN_BOKMAL)",
    ],
    &["pl", "Polish (Polski)", "_LANGID(LANG_POLISH)"],
    &[
        "pt",
        "Portuguese - Brazil (Português)",
        "MAKELANGID(LANG_PORTUGUESE, SUBLANG_PORTUGUESE_BRAZILIAN)",
    ],
    &["ro", "Romanian (Română)", "_LANGID(LANG_ROMANIAN)"],
    &["ru", "Russian (Русский)", "_LANGID(LANG_RUSSIAN)"],
    &["sk", "Slovak (Slovenčina)", "_LANGID(LANG_SLOVAK)"],
    &["sl", "Slovenian (Slovenščina)", "_LANGID(LANG_SLOVENIAN)"],
    &["sq", "Albanian (Shqip)", "_LANGID(LANG_ALBANIAN)"],
    &[
        "sr-rs",
        "Serbian (Latin)",
        "MAKELANGID(LANG_SERBIAN, SUBLANG_SERBIAN_LATIN)",
    ],
    &["sv", "Swedish (Svenska)", "_LANGID(LANG_SWEDISH)"],
    &["ta", "Tamil (தமிழ்)", "_LANGID(LANG_TAMIL)"],
    &["th", "Thai (ภาษาไทย)", "_LANGID(LANG_THAI)"],
    &["tr", "Turkish (Türkçe)", "_LANGID(LANG_TURKISH)"],
    &[
        "tw",
        "Chinese Traditional (繁體中文)",
        "MAKELANGID(LANG_CHINESE, SUBLANG_CHINESE_TRADITIONAL)",
    ],
    &["uk", "Ukrainian (Українська)", "_LANGID(LANG_UKRAINIAN)"],
    &["vn", "Vietnamese (Việt Nam)", "_LANGID(LANG_VIETNAMESE)"],
];

/// The built-in registry as owned descriptor tuples.
pub fn builtin_descriptors() -> Vec<Vec<String>> {
    BUILTIN_LANGUAGES
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}
