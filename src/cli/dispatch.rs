//! Command dispatch logic extracted from binary to keep `main` small.

use super::args::{Cli, Commands};
use super::handlers::{handle_check, handle_rules};
use crate::exit::BplintExit;
use anyhow::Result;

/// Executes the parsed command line. A bare invocation runs `check`.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: &Cli) -> Result<BplintExit> {
    match &cli.command {
        Some(Commands::Check(args)) => handle_check(args),
        Some(Commands::Rules(args)) => handle_rules(args),
        None => handle_check(&cli.check),
    }
}
