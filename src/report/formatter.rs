// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console output for run summaries

use crate::report::{DirectoryReport, GenerationReport};
use crate::storage::OutputStatus;
use crate::types::Language;
use colored::*;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &GenerationReport) {
        for dir in &report.directories {
            self.print_directory(dir);
        }
        println!();
        let up_to_date = report.all_up_to_date();
        let summary = format!(
            "{} directories, {}",
            report.directories.len(),
            if up_to_date {
                "all up to date"
            } else {
                "some out of date"
            }
        );
        if up_to_date {
            println!("{}", summary.bold().green());
        } else {
            println!("{}", summary.bold().red());
        }
    }

    pub fn print_directory(&self, dir: &DirectoryReport) {
        let status = match dir.status {
            OutputStatus::Written => "written".green(),
            OutputStatus::Unchanged => "unchanged".normal(),
            OutputStatus::Stale => "stale".red(),
            OutputStatus::Missing => "missing".red(),
        };
        println!(
            "{} {} ({} strings, {} languages) [{}]",
            "==>".bold().cyan(),
            dir.output_path.display(),
            dir.strings,
            dir.retained.len(),
            status
        );
        let line = format!("  Incomplete langs: {}", dir.incomplete_summary());
        if dir.excluded.is_empty() {
            println!("{}", line);
        } else {
            println!("{}", line.yellow());
        }
    }

    /// Registry listing in builder order.
    pub fn print_languages(&self, langs: &[Language]) {
        let rtl_count = langs.iter().filter(|l| l.is_rtl).count();
        let header = format!("{} languages ({} right-to-left)", langs.len(), rtl_count);
        println!("{}", header.bold().cyan());
        for (idx, lang) in langs.iter().enumerate() {
            let rtl = if lang.is_rtl { " RTL".magenta() } else { "".normal() };
            println!(
                "  {:>3} {:<6} {:<40} {}{}",
                idx, lang.code, lang.name, lang.platform_id, rtl
            );
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
