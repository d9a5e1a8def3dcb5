// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output templates. `{{Name}}` placeholders are filled by the renderer.

/// Per-language arrays plus the lookup table over them.
pub const TRANSLATIONS_TMPL: &str = r#"
{{Translations}}

static const char *gTranslations[LANGS_COUNT] = {
{{TranslationsRefs}}
};

const char *GetTranslationsForLang(int langIdx) { return gTranslations[langIdx]; }
"#;

/// The whole generated file. `{{Translations}}` receives the rendered
/// [`TRANSLATIONS_TMPL`].
pub const COMPACT_TMPL: &str = r#"/*
 DO NOT EDIT MANUALLY !!!
 Generated by trans-gen
*/

#include "{{HeaderInclude}}"

namespace {{Namespace}} {

#define LANGS_COUNT   {{LangsCount}}
#define STRINGS_COUNT {{StringsCount}}

const char *gOriginalStrings[STRINGS_COUNT] = {
{{OriginalStrings}}
};

const char **GetOriginalStrings() { return &gOriginalStrings[0]; }

{{Translations}}

const char *gLangCodes = {{LangCodes}} "\0";

const char *gLangNames = {{LangNames}} "\0";

// from http://msdn.microsoft.com/en-us/library/windows/desktop/dd318693(v=vs.85).aspx
// those definition are not present in 7.0A SDK
#ifndef LANG_CENTRAL_KURDISH
#define LANG_CENTRAL_KURDISH 0x92
#endif

#ifndef SUBLANG_CENTRAL_KURDISH_CENTRAL_KURDISH_IRAQ
#define SUBLANG_CENTRAL_KURDISH_CENTRAL_KURDISH_IRAQ 0x01
#endif

#define _LANGID(lang) MAKELANGID(lang, SUBLANG_NEUTRAL)
const LANGID gLangIds[LANGS_COUNT] = {
{{LangIds}}
};
#undef _LANGID

bool IsLangRtl(int idx)
{
  {{IsLangRtl}}
}

int gLangsCount = LANGS_COUNT;
int gStringsCount = STRINGS_COUNT;

const LANGID *GetLangIds() { return &gLangIds[0]; }

} // namespace {{Namespace}}
"#;
