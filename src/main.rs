// SPDX-License-Identifier: PMPL-1.0-or-later

//! trans-gen: generate C++ translation tables from a string dictionary
//!
//! Reads the translation dictionary and the list of translatable string
//! occurrences, then writes one `Trans_*_txt.cpp` per configured directory.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use trans_gen::config::GenConfig;
use trans_gen::driver;
use trans_gen::input::{load_dictionary, load_occurrences};
use trans_gen::logging::log_filter;
use trans_gen::registry::load_registry;
use trans_gen::report::{self, ReportFormatter};
use trans_gen::storage::StorageMode;

#[derive(Parser)]
#[command(name = "trans-gen")]
#[command(version)]
#[command(about = "Generate C++ translation tables from a string dictionary")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Translation dictionary: key => [{lang, translation}]
    #[arg(short, long, value_name = "FILE")]
    dictionary: PathBuf,

    /// String occurrences: [{text, dir}]
    #[arg(short, long, value_name = "FILE")]
    strings: PathBuf,

    /// Directories to generate (overrides the config; repeatable)
    #[arg(long = "dir", value_name = "DIR")]
    dirs: Vec<String>,

    /// Root the directories are resolved against (overrides the config)
    #[arg(short, long)]
    output_root: Option<PathBuf>,

    /// Write a run summary (JSON or YAML, by extension)
    #[arg(short, long)]
    report: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate translation files
    Generate(InputArgs),

    /// Check that generated files are up to date without writing them
    Check(InputArgs),

    /// Validate and list the language registry
    Langs,
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn run_generation(mut config: GenConfig, args: InputArgs, mode: StorageMode) -> Result<()> {
    if !args.dirs.is_empty() {
        config.directories = args.dirs;
    }
    if let Some(root) = args.output_root {
        config.output_root = root;
    }

    let dict = load_dictionary(&args.dictionary)?;
    let occurrences = load_occurrences(&args.strings)?;

    let summary = driver::generate_all(&dict, &occurrences, &config, mode)?;
    report::print_report(&summary);

    if let Some(path) = args.report {
        report::save_report(&summary, &path)?;
        println!("Report saved to: {}", path.display());
    }

    if mode == StorageMode::Check && !summary.all_up_to_date() {
        for dir in summary.out_of_date() {
            eprintln!(
                "{} {} is {:?}",
                "error:".bold().red(),
                dir.output_path.display(),
                dir.status
            );
        }
        bail!("generated translation files are out of date");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GenConfig::load(path)?,
        None => GenConfig::default(),
    };

    match cli.command {
        Commands::Generate(args) => run_generation(config, args, StorageMode::Write)?,
        Commands::Check(args) => run_generation(config, args, StorageMode::Check)?,
        Commands::Langs => {
            let langs = load_registry(&config.language_descriptors())?;
            ReportFormatter::new().print_languages(&langs);
        }
    }

    Ok(())
}
