//! Facade crate for the moodscore engine.
//!
//! This crate re-exports the core domain types together with the rule-based
//! scorer, so callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use moodscore_core::{
    BASELINE_SCORE, Feedback, FixedJitter, INTENSIFIER_MULTIPLIER, JITTER_AMPLITUDE, Jitter,
    MAX_SCORE, MIN_SCORE, Mood, NoJitter, PatternRule, Polarity, RuleTable, ScoreResult, Scorer,
};

pub use moodscore_scorer::{
    Assessment, RuleBasedScorer, RuleCompileError, RuleMatch, RuleSet, SeededJitter,
    UniformJitter,
};
