// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod prefix;
pub mod prompt;
pub mod renamer;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::env;
use std::io::{self, BufRead, Write};

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::{Outcome, RuntimeConfig};
use self::scanner::Scanner;

/// Parses arguments and runs against the real terminal.
pub fn run() -> Result<Outcome> {
    let args = Cli::parse();

    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(args, &current_dir)?;
    log::debug!("Resolved configuration: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&config, &mut stdin.lock(), &mut stdout.lock())
}

/// List, resolve the prefix, show the plan, confirm, rename.
pub fn execute<R: BufRead, W: Write>(
    config: &RuntimeConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let scanner = Scanner::new(config)?;
    let entries = scanner.scan()?;

    if entries.is_empty() {
        log::warn!("No candidates found for the specified criteria.");
        return Ok(Outcome::NothingToDo);
    }

    let names: Vec<&str> = entries.iter().filter_map(|e| e.file_name()).collect();
    let prefix = prefix::resolve_prefix(config.prefix.as_deref(), &names);
    if prefix.is_empty() {
        log::warn!("The names share no common prefix; nothing to rename.");
        return Ok(Outcome::NothingToDo);
    }
    log::info!("Using prefix '{}'", prefix);

    let plan = renamer::plan(&entries, &prefix, &config.replacement);
    if plan.is_empty() {
        log::warn!("No name would change with prefix '{}'.", prefix);
        return Ok(Outcome::NothingToDo);
    }

    writeln!(output, "{}", OutputGenerator::generate_plan(&plan))?;

    if config.dry_run {
        return Ok(Outcome::DryRun(plan));
    }

    if !config.assume_yes && !prompt::confirm(input, output, "Proceed?")? {
        writeln!(output, "Aborted; nothing was renamed.")?;
        return Ok(Outcome::Aborted);
    }

    let report = renamer::execute(plan);
    for (_, err) in &report.failed {
        eprintln!("{}", err.to_string().red());
    }
    writeln!(output, "{}", OutputGenerator::generate_summary(&report))?;

    Ok(Outcome::Completed(report))
}
