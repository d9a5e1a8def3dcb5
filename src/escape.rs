// SPDX-License-Identifier: PMPL-1.0-or-later

//! C string literal escaping
//!
//! Output literals are 7-bit clean: double quotes are backslash-escaped and
//! every byte >= 0x80 of the UTF-8 encoding becomes a three-digit octal
//! escape. Backslashes are left alone because keys already carry C escapes
//! such as `\t` and `\n` in source form.

/// Literal emitted for an empty standalone string.
pub const NULL_LITERAL: &str = "NULL";

/// Escape for a byte that isn't 7-bit ASCII: `0xC3` => `\303`.
pub fn c_oct(byte: u8) -> String {
    debug_assert!(byte >= 0x80);
    format!("\\{:03o}", byte)
}

fn escape_body(txt: &str) -> String {
    let mut out = String::with_capacity(txt.len());
    for &byte in txt.as_bytes() {
        match byte {
            b'"' => out.push_str("\\\""),
            b if b < 0x80 => out.push(b as char),
            b => out.push_str(&c_oct(b)),
        }
    }
    out
}

/// Escape one string for a standalone `const char *` slot.
///
/// An empty string becomes `NULL`.
pub fn escape_standalone(txt: &str) -> String {
    if txt.is_empty() {
        return NULL_LITERAL.to_string();
    }
    format!("\"{}\"", escape_body(txt))
}

/// Escape one string as a self-terminating piece of a concatenated table.
///
/// Always ends with a single `\0` before the closing quote; an empty string
/// becomes `"\0"`.
pub fn escape_concatenable(txt: &str) -> String {
    format!("\"{}\\0\"", escape_body(txt))
}
