// src/cli/handlers.rs
//! Command handlers.

use super::args::{CheckArgs, ConfigArgs};
use crate::config::Config;
use crate::exit::BplintExit;
use crate::reporting::{ConsoleReporter, JsonReporter};
use crate::scan::Linter;
use crate::types::RunSummary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Handles the check command. Exit code depends only on missing files.
///
/// # Errors
/// Returns error if configuration fails to load or the report cannot be written.
pub fn handle_check(args: &CheckArgs) -> Result<BplintExit> {
    if args.no_color {
        colored::control::set_override(false);
    }
    let stdout = io::stdout();
    let summary = run_check(args, stdout.lock())?;
    Ok(BplintExit::from_pass(summary.overall_pass))
}

/// Runs the check pipeline, writing the report to `out`.
///
/// # Errors
/// Returns error if configuration fails to load or the report cannot be written.
pub fn run_check<W: Write>(args: &CheckArgs, out: W) -> Result<RunSummary> {
    let mut config = load_config(&args.common)?;
    config.override_files(args.files.clone());
    let linter = Linter::new(&config.rules)?;

    if config.verbose {
        eprintln!(
            "INFO: checking {} files under {}",
            config.files.len(),
            config.root.display()
        );
    }

    let summary = if args.json {
        linter.run(&config, &mut JsonReporter::new(out))?
    } else {
        linter.run(&config, &mut ConsoleReporter::new(out))?
    };
    Ok(summary)
}

/// Handles the rules command.
///
/// # Errors
/// Returns error if configuration fails to load or a pattern fails to compile.
pub fn handle_rules(args: &ConfigArgs) -> Result<BplintExit> {
    let stdout = io::stdout();
    print_rules(args, stdout.lock())?;
    Ok(BplintExit::Success)
}

/// Writes the effective rule set to `out`.
///
/// # Errors
/// Returns error if configuration fails to load or a pattern fails to compile.
pub fn print_rules<W: Write>(args: &ConfigArgs, mut out: W) -> Result<()> {
    let config = load_config(args)?;
    let linter = Linter::new(&config.rules)?;

    let source = config
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    writeln!(out, "{} {source}", "Config:".bold())?;
    writeln!(out, "{} {}", "Root:".bold(), config.root.display())?;
    writeln!(out, "{} {:?}", "Separator:".bold(), config.rules.separator)?;

    let names: Vec<&str> = linter.breakpoint_scanner().names().collect();
    writeln!(out, "{} {}", "Breakpoints:".bold(), names.join(", "))?;

    writeln!(out, "{}", "Files:".bold())?;
    for file in &config.files {
        writeln!(out, "  {}", file.display())?;
    }

    writeln!(out, "{}", "Patterns:".bold())?;
    for pattern in linter.pattern_classifier().patterns() {
        writeln!(out, "  {}: {}", pattern.name.cyan(), pattern.regex.as_str())?;
    }
    Ok(())
}

fn load_config(args: &ConfigArgs) -> Result<Config> {
    let mut config = Config::load(&args.root, args.config.as_deref())?;
    config.verbose = args.verbose;
    if config.verbose {
        match &config.source {
            Some(path) => eprintln!("INFO: loaded config from {}", path.display()),
            None => eprintln!("INFO: no bplint.toml found, using built-in defaults"),
        }
    }
    Ok(config)
}
