//! Rule-based mood scoring.
//!
//! [`RuleBasedScorer`] implements the [`Scorer`](moodscore_core::Scorer) trait
//! over a compiled [`RuleSet`]:
//! - the text is lower-cased and every rule's non-overlapping matches are
//!   collected;
//! - each match moves the score by its rule's weight, times
//!   [`INTENSIFIER_MULTIPLIER`](moodscore_core::INTENSIFIER_MULTIPLIER) when
//!   the matched span carries an intensifier word;
//! - a jitter value from the injected [`Jitter`] source is added, bounded to
//!   `[-5.0, +5.0]`;
//! - the total is clamped to `0.0..=100.0`, rounded, and mapped to a mood and
//!   a feedback sentence.
//!
//! # Examples
//!
//! ```
//! use moodscore_core::{FixedJitter, Scorer};
//! use moodscore_scorer::RuleBasedScorer;
//!
//! # fn main() -> Result<(), moodscore_scorer::RuleCompileError> {
//! let scorer = RuleBasedScorer::with_defaults(FixedJitter::new(0.0))?;
//! let result = scorer.score("I am really happy");
//! assert_eq!(result.score(), 94);
//! assert_eq!(result.label(), "Amazing");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use log::{debug, warn};
use moodscore_core::{BASELINE_SCORE, Jitter, RuleTable, ScoreResult, Scorer};

mod error;
mod jitter;
mod matcher;

pub use error::RuleCompileError;
pub use jitter::{SeededJitter, UniformJitter};
pub use matcher::{RuleMatch, RuleSet};

use jitter::jitter_window;

/// Explained outcome of a single scoring call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment {
    /// Every rule match, in table order.
    pub matches: Vec<RuleMatch>,
    /// Jitter added after pattern adjustments, already bounded.
    pub jitter: f64,
    /// Score after clamping and before rounding.
    pub clamped: f64,
    /// Final record.
    pub result: ScoreResult,
}

impl Assessment {
    /// Net adjustment contributed by the matches.
    #[must_use]
    pub fn adjustment(&self) -> f64 {
        total_delta(&self.matches)
    }
}

/// Scorer driven by weighted pattern rules and an injectable jitter source.
///
/// Scoring is infallible once constructed; only compiling the rule table can
/// fail.
#[derive(Debug)]
pub struct RuleBasedScorer<J = UniformJitter> {
    rules: RuleSet,
    jitter: J,
}

impl<J: Jitter> RuleBasedScorer<J> {
    /// Compile `table` and pair it with `jitter`.
    ///
    /// # Errors
    /// Returns [`RuleCompileError`] when a rule has an invalid weight or
    /// pattern.
    pub fn new(table: &RuleTable, jitter: J) -> Result<Self, RuleCompileError> {
        let rules = RuleSet::compile(table)?;
        Ok(Self::from_rule_set(rules, jitter))
    }

    /// Build a scorer over the built-in [`RuleTable::DEFAULT`].
    ///
    /// # Errors
    /// Propagates [`RuleCompileError`]; the built-in table always compiles.
    pub fn with_defaults(jitter: J) -> Result<Self, RuleCompileError> {
        Self::new(&RuleTable::DEFAULT, jitter)
    }

    /// Pair an already compiled rule set with `jitter`.
    #[must_use]
    pub const fn from_rule_set(rules: RuleSet, jitter: J) -> Self {
        Self { rules, jitter }
    }

    /// Compiled rules in use.
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Score `text` and report how the result was reached.
    #[must_use]
    pub fn assess(&self, text: &str) -> Assessment {
        let matches = self.rules.matches(text);
        let jitter = bound_jitter(self.jitter.sample());
        let raw = combine(total_delta(&matches), jitter);
        let clamped = Self::sanitise(raw);
        let result = ScoreResult::from_raw(clamped);
        debug!(
            "scored {} chars: {} matches, raw {raw}, jitter {jitter}, final {} ({})",
            text.chars().count(),
            matches.len(),
            result.score(),
            result.label()
        );
        Assessment {
            matches,
            jitter,
            clamped,
            result,
        }
    }
}

impl<J: Jitter> Scorer for RuleBasedScorer<J> {
    fn score(&self, text: &str) -> ScoreResult {
        self.assess(text).result
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the score is a floating-point sum of rule deltas"
)]
fn total_delta(matches: &[RuleMatch]) -> f64 {
    matches
        .iter()
        .fold(0.0, |total, found| total + found.delta)
}

#[expect(
    clippy::float_arithmetic,
    reason = "the raw score offsets the baseline by adjustments and jitter"
)]
const fn combine(adjustment: f64, jitter: f64) -> f64 {
    BASELINE_SCORE + adjustment + jitter
}

/// Keep jitter inside `[-5.0, +5.0]`, replacing non-finite draws with `0.0`.
pub(crate) fn bound_jitter(sample: f64) -> f64 {
    if !sample.is_finite() {
        warn!("jitter source returned non-finite value {sample}; using 0");
        return 0.0;
    }
    let window = jitter_window();
    if window.contains(&sample) {
        return sample;
    }
    warn!("jitter source returned {sample}, outside {window:?}; clamping");
    sample.clamp(*window.start(), *window.end())
}
