use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bplint",
    version,
    about = "Checks UI component sources for responsive breakpoint classes",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub check: CheckArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the expected component files and report breakpoint usage
    Check(CheckArgs),
    /// Print the effective breakpoints, file list, and pattern table
    Rules(ConfigArgs),
}

/// Options shared by every command that loads configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Project root the component paths are relative to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
    /// Config file to use instead of `<root>/bplint.toml`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print diagnostics to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: ConfigArgs,
    /// Emit a JSON report instead of the console report
    #[arg(long)]
    pub json: bool,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Files to check, overriding the configured list
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}
