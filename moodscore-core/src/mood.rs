//! Score tiers: the six labelled moods and the five feedback sentences.

use std::fmt;

/// Categorical mood derived from a rounded score.
///
/// Tiers are evaluated highest threshold first; every score in `0..=100`
/// maps to exactly one variant.
///
/// # Examples
///
/// ```
/// use moodscore_core::Mood;
///
/// assert_eq!(Mood::from_score(79), Mood::Happy);
/// assert_eq!(Mood::from_score(80).label(), "Amazing");
/// assert_eq!(Mood::Poor.color(), "#dc2626");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mood {
    /// Score of at least 80.
    Amazing,
    /// Score of at least 65.
    Happy,
    /// Score of at least 50.
    Good,
    /// Score of at least 35.
    Okay,
    /// Score of at least 20.
    Low,
    /// Anything below 20.
    Poor,
}

impl Mood {
    /// Every tier, highest threshold first.
    pub const ALL: [Self; 6] = [
        Self::Amazing,
        Self::Happy,
        Self::Good,
        Self::Okay,
        Self::Low,
        Self::Poor,
    ];

    /// Select the tier for a rounded score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Amazing,
            65..=79 => Self::Happy,
            50..=64 => Self::Good,
            35..=49 => Self::Okay,
            20..=34 => Self::Low,
            _ => Self::Poor,
        }
    }

    /// Inclusive lower bound of the tier.
    #[must_use]
    pub const fn threshold(self) -> u8 {
        match self {
            Self::Amazing => 80,
            Self::Happy => 65,
            Self::Good => 50,
            Self::Okay => 35,
            Self::Low => 20,
            Self::Poor => 0,
        }
    }

    /// Human-readable label shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Amazing => "Amazing",
            Self::Happy => "Happy",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Low => "Low",
            Self::Poor => "Poor",
        }
    }

    /// Hex colour bound to the label.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Amazing => "#10b981",
            Self::Happy => "#3b82f6",
            Self::Good => "#8b5cf6",
            Self::Okay => "#f59e0b",
            Self::Low => "#ef4444",
            Self::Poor => "#dc2626",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canned feedback keyed by score range.
///
/// Feedback uses the mood thresholds collapsed to five tiers: the two lowest
/// moods share one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feedback {
    /// Score of at least 80.
    Thriving,
    /// Score of at least 65.
    Content,
    /// Score of at least 50.
    Steady,
    /// Score of at least 35.
    Struggling,
    /// Anything below 35.
    Distressed,
}

impl Feedback {
    /// Select the feedback tier for a rounded score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Thriving,
            65..=79 => Self::Content,
            50..=64 => Self::Steady,
            35..=49 => Self::Struggling,
            _ => Self::Distressed,
        }
    }

    /// The sentence rendered verbatim by presentation layers.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Thriving => "You're very happy, keep going!",
            Self::Content => "You're happy today, good job!",
            Self::Steady => "You're decently happy right now.",
            Self::Struggling => "You're not feeling great right now, it'll get better.",
            Self::Distressed => "You're having a bad time right now, don't worry it'll pass.",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
