// SPDX-License-Identifier: PMPL-1.0-or-later

//! trans-gen: translation table generator.
//!
//! Turns a flat dictionary of source strings and their translations into
//! C++ source files, one per module directory. Each file carries the
//! original strings, one escaped translation blob per sufficiently
//! complete language, and the language metadata tables (codes, names,
//! platform ids, right-to-left flags).
//!
//! PIPELINE (per directory, strictly sequential):
//! 1. **Registry**: raw descriptors become validated [`types::Language`]s.
//! 2. **Filter**: languages missing more than 20% of the directory's keys
//!    are dropped for that directory.
//! 3. **Builder**: keys, translations and metadata become escaped C tables.
//! 4. **Renderer**: tables are pasted into a fixed template and written to
//!    `<dir>/Trans_<name>_txt.cpp`.

pub mod builder;
pub mod config;
pub mod driver;
pub mod error;
pub mod escape;
pub mod filter;
pub mod input;
pub mod logging;
pub mod registry;
pub mod render;
pub mod report;
pub mod storage;
pub mod types;
