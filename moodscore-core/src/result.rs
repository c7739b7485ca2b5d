//! The record returned by every scoring call.

use crate::{BASELINE_SCORE, Feedback, MAX_SCORE, MIN_SCORE, Mood};

/// Final outcome of scoring one piece of text.
///
/// The record is built from a single integer score, so the label, colour and
/// feedback always agree with it. Renderers display `label`, `color`, `score`
/// and `feedback` verbatim.
///
/// # Examples
///
/// ```
/// use moodscore_core::{Mood, ScoreResult};
///
/// let result = ScoreResult::from_raw(93.5);
/// assert_eq!(result.score(), 94);
/// assert_eq!(result.mood(), Mood::Amazing);
/// assert_eq!(result.feedback(), "You're very happy, keep going!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreResult {
    score: u8,
    mood: Mood,
    feedback: Feedback,
}

impl ScoreResult {
    /// Build a result from an already rounded score.
    ///
    /// Scores above 100 are clamped.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        let bounded = if score > 100 { 100 } else { score };
        Self {
            score: bounded,
            mood: Mood::from_score(bounded),
            feedback: Feedback::from_score(bounded),
        }
    }

    /// Clamp a raw floating-point score to `0.0..=100.0`, round it to the
    /// nearest integer and build the result.
    ///
    /// Non-finite input falls back to the baseline.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        // Clamped to 0..=100 and rounded, so the cast is exact.
        let rounded = clamp_raw(raw).round();
        Self::from_score(rounded as u8)
    }

    /// Integer score in `0..=100`.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Tier selected by the score.
    #[must_use]
    pub const fn mood(&self) -> Mood {
        self.mood
    }

    /// Label of the selected tier.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.mood.label()
    }

    /// Colour bound to the label.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.mood.color()
    }

    /// Feedback tier selected by the score.
    #[must_use]
    pub const fn feedback_tier(&self) -> Feedback {
        self.feedback
    }

    /// Feedback sentence for the score.
    #[must_use]
    pub const fn feedback(&self) -> &'static str {
        self.feedback.message()
    }
}

/// Clamp a raw score into the reportable range.
///
/// Returns [`BASELINE_SCORE`] for non-finite values.
#[must_use]
pub fn clamp_raw(raw: f64) -> f64 {
    if !raw.is_finite() {
        return BASELINE_SCORE;
    }
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScoreResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut record = serializer.serialize_struct("ScoreResult", 4)?;
        record.serialize_field("score", &self.score)?;
        record.serialize_field("label", self.label())?;
        record.serialize_field("color", self.color())?;
        record.serialize_field("feedback", self.feedback())?;
        record.end()
    }
}
