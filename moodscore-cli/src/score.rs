//! Score command implementation for the moodscore CLI.

use std::io::{Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::{Parser, ValueEnum};
use log::debug;
use moodscore_core::{Jitter, NoJitter};
use moodscore_scorer::{RuleBasedScorer, SeededJitter, UniformJitter};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_EXPLAIN, ARG_FORMAT, ARG_INPUT, ARG_JITTER, ARG_SEED, ARG_TEXT, CliError, render,
};

/// How the jitter source is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum JitterMode {
    /// Draw jitter from the thread-local random generator (or a seed).
    Random,
    /// Disable jitter entirely.
    Off,
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Label, percentage bar, colour and feedback.
    #[default]
    Text,
    /// Pretty-printed JSON record.
    Json,
}

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a piece of text against the built-in mood rules. The \
                 text comes from the positional argument, the --input file, \
                 or stdin. Options can also come from configuration files or \
                 environment variables.",
    about = "Score a piece of text"
)]
#[ortho_config(prefix = "MOODSCORE")]
pub(crate) struct ScoreArgs {
    /// Text to score. Read from --input or stdin when omitted.
    #[arg(value_name = ARG_TEXT)]
    #[serde(default)]
    pub(crate) text: Option<String>,
    /// Read the text from a UTF-8 file.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Jitter mode (`random` or `off`).
    #[arg(long = ARG_JITTER, value_enum, value_name = "mode")]
    #[serde(default)]
    pub(crate) jitter: Option<JitterMode>,
    /// Seed for reproducible jitter.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Output format (`text` or `json`).
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Include every rule match and the applied jitter.
    #[arg(
        long = ARG_EXPLAIN,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) explain: Option<bool>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    Inline(String),
    File(Utf8PathBuf),
    Stdin,
}

/// Jitter source resolved from mode and seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JitterChoice {
    Random,
    Seeded(u64),
    Off,
}

impl JitterChoice {
    fn build(self) -> Box<dyn Jitter> {
        match self {
            Self::Random => Box::new(UniformJitter),
            Self::Seeded(seed) => Box::new(SeededJitter::new(seed)),
            Self::Off => Box::new(NoJitter),
        }
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) source: InputSource,
    pub(crate) jitter: JitterChoice,
    pub(crate) format: OutputFormat,
    pub(crate) explain: bool,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let source = match (args.text, args.input) {
            (Some(_), Some(_)) => return Err(CliError::ConflictingInput { field: ARG_INPUT }),
            (Some(text), None) => InputSource::Inline(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        };
        let jitter = match (args.jitter, args.seed) {
            (Some(JitterMode::Off), Some(_)) => {
                return Err(CliError::ConflictingJitter {
                    seed: ARG_SEED,
                    jitter: ARG_JITTER,
                });
            }
            (Some(JitterMode::Off), None) => JitterChoice::Off,
            (_, Some(seed)) => JitterChoice::Seeded(seed),
            (_, None) => JitterChoice::Random,
        };
        Ok(Self {
            source,
            jitter,
            format: args.format.unwrap_or_default(),
            explain: args.explain.unwrap_or(false),
        })
    }
}

pub(crate) fn run_score_with(
    args: ScoreArgs,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_score(&config, stdin, writer)
}

pub(crate) fn execute_score(
    config: &ScoreConfig,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let text = read_text(&config.source, stdin)?;
    if text.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    let scorer = RuleBasedScorer::with_defaults(config.jitter.build())?;
    let assessment = scorer.assess(&text);
    match config.format {
        OutputFormat::Text => render::write_text(writer, &assessment, config.explain)
            .map_err(CliError::WriteOutput),
        OutputFormat::Json => render::write_json(writer, &assessment, config.explain),
    }
}

/// Load the text to score from its configured source.
pub(crate) fn read_text(source: &InputSource, stdin: &mut dyn Read) -> Result<String, CliError> {
    match source {
        InputSource::Inline(text) => Ok(text.clone()),
        InputSource::File(path) => read_file(path),
        InputSource::Stdin => {
            debug!("reading text from stdin");
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(CliError::ReadStdin)?;
            Ok(text)
        }
    }
}

fn read_file(path: &Utf8Path) -> Result<String, CliError> {
    debug!("reading text from {path}");
    let read_error = |source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(read_error)?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(read_error)?;
    Ok(text)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
