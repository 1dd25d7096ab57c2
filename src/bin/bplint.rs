use bplint_core::cli::{self, Cli};
use bplint_core::exit::BplintExit;
use clap::Parser;
use colored::Colorize;

fn main() -> BplintExit {
    let cli = Cli::parse();

    match cli::dispatch::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            BplintExit::Error
        }
    }
}
