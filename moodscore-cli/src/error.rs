//! Error types emitted by the moodscore CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use moodscore_scorer::RuleCompileError;
use thiserror::Error;

/// Errors emitted by the moodscore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Text was supplied both inline and through `--input`.
    #[error("pass text either as an argument or with --{field}, not both")]
    ConflictingInput { field: &'static str },
    /// A jitter seed was combined with disabled jitter.
    #[error("--{seed} cannot be combined with --{jitter} off")]
    ConflictingJitter {
        seed: &'static str,
        jitter: &'static str,
    },
    /// The text to score was empty or only whitespace.
    #[error("no text to score: input is empty")]
    EmptyInput,
    /// Reading the `--input` file failed.
    #[error("failed to read input file {path:?}: {source}")]
    ReadInput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading standard input failed.
    #[error("failed to read text from stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
    /// Compiling the rule table failed.
    #[error("failed to build scorer: {0}")]
    BuildScorer(#[from] RuleCompileError),
    /// Serialising the result to JSON failed.
    #[error("failed to serialise result: {0}")]
    SerialiseResult(#[source] serde_json::Error),
    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
