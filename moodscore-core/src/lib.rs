//! Core domain types for the moodscore engine.
//!
//! The crate holds everything that is data rather than machinery: the
//! [`ScoreResult`] record handed to renderers, the six [`Mood`] tiers and five
//! [`Feedback`] sentences, the static [`RuleTable`] of weighted patterns, and
//! the [`Scorer`] and [`Jitter`] seams that matching engines plug into.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod jitter;
pub mod mood;
pub mod result;
pub mod rules;
pub mod scorer;

pub use jitter::{FixedJitter, Jitter, NoJitter};
pub use mood::{Feedback, Mood};
pub use result::ScoreResult;
pub use rules::{PatternRule, Polarity, RuleTable};
pub use scorer::Scorer;

/// Neutral starting value before any pattern adjustments.
pub const BASELINE_SCORE: f64 = 50.0;

/// Lowest reportable score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest reportable score.
pub const MAX_SCORE: f64 = 100.0;

/// Half-width of the uniform jitter window, `[-5.0, +5.0]`.
pub const JITTER_AMPLITUDE: f64 = 5.0;

/// Weight multiplier applied when a match carries an intensifier word.
pub const INTENSIFIER_MULTIPLIER: f64 = 1.5;
