//! Score free-form text.
//!
//! The `Scorer` trait turns a string into a [`ScoreResult`](crate::ScoreResult).

use crate::ScoreResult;
use crate::result::clamp_raw;

/// Calculate a mood score for a piece of text.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent callers. The method is infallible: empty, enormous or
/// non-linguistic input still yields a well-formed result, and empty input
/// yields the baseline.
///
/// Use [`Scorer::sanitise`] to clamp raw totals before rounding.
///
/// # Examples
///
/// ```rust
/// use moodscore_core::{ScoreResult, Scorer};
///
/// struct NeutralScorer;
///
/// impl Scorer for NeutralScorer {
///     fn score(&self, _text: &str) -> ScoreResult {
///         ScoreResult::from_raw(Self::sanitise(50.0))
///     }
/// }
///
/// assert_eq!(NeutralScorer.score("anything").label(), "Good");
/// ```
pub trait Scorer: Send + Sync {
    /// Return the result for `text`.
    fn score(&self, text: &str) -> ScoreResult;

    /// Clamp and validate a raw score.
    ///
    /// Returns the baseline for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(raw: f64) -> f64
    where
        Self: Sized,
    {
        clamp_raw(raw)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, text: &str) -> ScoreResult {
        (**self).score(text)
    }
}
