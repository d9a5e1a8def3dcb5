// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fatal generation errors
//!
//! Every variant aborts the whole run. Partially generated tables are never
//! written.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("language descriptor {descriptor:?} must have 3 or 4 elements, got {len}")]
    MalformedDescriptor { descriptor: Vec<String>, len: usize },

    #[error("language descriptor {descriptor:?} has 4th element {marker:?}, expected \"RTL\"")]
    InvalidRtlMarker {
        descriptor: Vec<String>,
        marker: String,
    },

    #[error("duplicate language code {0:?} in registry")]
    DuplicateLanguageCode(String),

    #[error("registry has no \"en\" language")]
    MissingDefaultLanguage,

    #[error("first sorted language is {0:?}, expected \"en\"")]
    DefaultLanguageNotFirst(String),

    #[error("registry has {found} right-to-left languages, expected exactly {expected}")]
    RtlCountMismatch { expected: usize, found: usize },

    #[error("key {key:?} has {count} translations for language {lang:?}")]
    AmbiguousTranslation {
        key: String,
        lang: String,
        count: usize,
    },

    #[error("language {0:?} is not in the working list")]
    LanguageNotInWorkingList(String),

    #[error("directory {0:?} has no dictionary strings to translate")]
    NoStrings(String),

    #[error("invalid identifier pattern: {0}")]
    InvalidPattern(String),
}

pub type GenResult<T> = std::result::Result<T, GenError>;
