//! Static pattern tables driving the rule-based scorer.
//!
//! Rules are plain data: a name, a regular-expression source and a weight.
//! Compilation and matching live in the scorer crate so the tables can be
//! audited and tested on their own.
//!
//! Word boundaries are ASCII-only: a non-ASCII letter such as `é` ends a word,
//! so "caféhappy" still matches "happy".

/// Direction in which a rule moves the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Matches raise the score.
    Positive,
    /// Matches lower the score.
    Negative,
}

const POSITIVE_INTENSIFIERS: &[&str] = &[
    "really",
    "super",
    "pretty",
    "very",
    "extremely",
    "incredibly",
];

const NEGATIVE_INTENSIFIERS: &[&str] = &[
    "really",
    "super",
    "pretty",
    "very",
    "so",
    "extremely",
    "incredibly",
];

impl Polarity {
    /// Sign applied to a rule's weight.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// Words that boost a match of this polarity when they appear anywhere in
    /// the matched span, including inside a longer word.
    ///
    /// `so` only boosts negative matches.
    #[must_use]
    pub const fn intensifiers(self) -> &'static [&'static str] {
        match self {
            Self::Positive => POSITIVE_INTENSIFIERS,
            Self::Negative => NEGATIVE_INTENSIFIERS,
        }
    }
}

/// A weighted, case-insensitive pattern.
///
/// # Examples
///
/// ```
/// use moodscore_core::PatternRule;
///
/// const CALM: PatternRule = PatternRule::new("calm", r"\b(?:calm|zen)\b", 16.0);
/// assert_eq!(CALM.weight, 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternRule {
    /// Short identifier used in diagnostics.
    pub name: &'static str,
    /// Regular-expression source, matched case-insensitively.
    pub pattern: &'static str,
    /// Score delta per match; must be finite and positive.
    pub weight: f64,
}

impl PatternRule {
    /// Declare a rule.
    #[must_use]
    pub const fn new(name: &'static str, pattern: &'static str, weight: f64) -> Self {
        Self {
            name,
            pattern,
            weight,
        }
    }
}

/// Ordered positive and negative rule sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleTable {
    /// Score-increasing rules.
    pub positive: &'static [PatternRule],
    /// Score-decreasing rules.
    pub negative: &'static [PatternRule],
}

impl RuleTable {
    /// The built-in English mood tables.
    pub const DEFAULT: Self = Self {
        positive: POSITIVE_RULES,
        negative: NEGATIVE_RULES,
    };

    /// Iterate over every rule with its polarity, positive rules first.
    pub fn iter(&self) -> impl Iterator<Item = (Polarity, &'static PatternRule)> {
        let positive: &'static [PatternRule] = self.positive;
        let negative: &'static [PatternRule] = self.negative;
        positive
            .iter()
            .map(|rule| (Polarity::Positive, rule))
            .chain(negative.iter().map(|rule| (Polarity::Negative, rule)))
    }

    /// Total number of rules across both sets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Report whether the table holds no rules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const POSITIVE_RULES: &[PatternRule] = &[
    PatternRule::new(
        "elated",
        r"(?-u:\b)(?:i'?m\s+)?(?:feeling\s+)?(?:really\s+|super\s+|very\s+|pretty\s+|extremely\s+)?(?:happy|great|amazing|wonderful|fantastic|awesome|excellent|excited|joyful|blessed|good|ecstatic|thrilled)(?-u:\b)",
        29.0,
    ),
    PatternRule::new(
        "affection",
        r"(?-u:\b)(?:love|loving|adore|enjoy|delighted)(?-u:\b)",
        20.0,
    ),
    PatternRule::new(
        "optimism",
        r"(?-u:\b)(?:positive|optimistic|hopeful|confident|proud)(?-u:\b)",
        17.0,
    ),
    PatternRule::new("calm", r"(?-u:\b)(?:calm|relaxed|peaceful|zen)(?-u:\b)", 16.0),
    PatternRule::new(
        "triumph",
        r"(?-u:\b)(?:best\s+day|perfect|phenomenal|outstanding|brilliant)(?-u:\b)",
        25.0,
    ),
    PatternRule::new(
        "positive-emoji",
        "😊|😄|😃|🙂|😁|🥰|😍|🤗|✨|⭐|🌟|💪|🎉|🔥|❤️|💖|😎",
        14.0,
    ),
];

const NEGATIVE_RULES: &[PatternRule] = &[
    PatternRule::new(
        "dejected",
        r"(?-u:\b)(?:i'?m\s+)?(?:feeling\s+)?(?:really\s+|super\s+|very\s+|pretty\s+|so\s+|extremely\s+)?(?:sad|depressed|down|low|blue|miserable|awful|bad|terrible|horrible|devastated)(?-u:\b)",
        29.0,
    ),
    PatternRule::new(
        "fatigue",
        r"(?-u:\b)(?:tired|exhausted|drained|burnt\s+out)(?-u:\b)",
        20.0,
    ),
    PatternRule::new(
        "anxiety",
        r"(?-u:\b)(?:stressed|anxious|worried|nervous|overwhelmed|panicked)(?-u:\b)",
        17.0,
    ),
    PatternRule::new("anger", r"(?-u:\b)(?:angry|mad|furious|frustrated)(?-u:\b)", 20.0),
    PatternRule::new(
        "isolation",
        r"(?-u:\b)(?:lonely|isolated|alone|abandoned)(?-u:\b)",
        23.0,
    ),
    PatternRule::new(
        "despair",
        r"(?-u:\b)(?:hopeless|helpless|worthless|broken)(?-u:\b)",
        35.0,
    ),
    PatternRule::new(
        "catastrophe",
        r"(?-u:\b)(?:worst\s+day|nightmare|disaster)(?-u:\b)",
        29.0,
    ),
    PatternRule::new(
        "negative-emoji",
        "😢|😭|😔|😞|😣|😩|😤|😠|😡|💔|😰|😱",
        14.0,
    ),
];
