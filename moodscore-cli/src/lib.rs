//! Command-line renderer for moodscore.
//!
//! `moodscore score` reads text from an argument, a file or stdin, scores it
//! with the built-in rule table and prints the result either as a short
//! human-readable block or as JSON. `moodscore rules` prints the rule table.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use moodscore_core::RuleTable;

mod error;
mod render;
mod score;

pub use error::CliError;

use score::{ScoreArgs, run_score_with};

pub(crate) const ARG_TEXT: &str = "text";
pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_JITTER: &str = "jitter";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_EXPLAIN: &str = "explain";

/// Run the moodscore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when the
/// input cannot be read or is blank, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Score(args) => {
            let mut stdin = std::io::stdin().lock();
            run_score_with(args, &mut stdin, &mut stdout)
        }
        Command::Rules => {
            render::write_rule_table(&mut stdout, &RuleTable::DEFAULT).map_err(CliError::WriteOutput)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "moodscore",
    about = "Estimate how happy a piece of text sounds",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a piece of text and print the mood it suggests.
    Score(ScoreArgs),
    /// Print the weighted pattern rules used for scoring.
    Rules,
}

#[cfg(test)]
mod tests;
