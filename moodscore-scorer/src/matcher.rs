//! Compiled rule matching.
//!
//! Each [`PatternRule`] becomes a case-insensitive `regex::Regex`. The regex
//! engine runs in time linear in the input, so attacker-controlled text cannot
//! trigger catastrophic backtracking.

#![forbid(unsafe_code)]

use log::debug;
use moodscore_core::{INTENSIFIER_MULTIPLIER, PatternRule, Polarity, RuleTable};
use regex::{Regex, RegexBuilder};

use crate::RuleCompileError;

/// Upper bound on the compiled size of a single rule's automaton.
const RULE_SIZE_LIMIT: usize = 1 << 22;

/// One rule occurrence found in a piece of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleMatch {
    /// Name of the rule that matched.
    pub rule: &'static str,
    /// Whether the match raises or lowers the score.
    pub polarity: Polarity,
    /// Matched text, lower-cased.
    pub span: String,
    /// Whether the span carried an intensifier word.
    pub intensified: bool,
    /// Signed score adjustment contributed by this match.
    pub delta: f64,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    polarity: Polarity,
    rule: PatternRule,
    regex: Regex,
}

impl CompiledRule {
    fn compile(polarity: Polarity, rule: PatternRule) -> Result<Self, RuleCompileError> {
        if !rule.weight.is_finite() || rule.weight <= 0.0 {
            return Err(RuleCompileError::InvalidWeight {
                rule: rule.name,
                weight: rule.weight,
            });
        }
        let regex = RegexBuilder::new(rule.pattern)
            .case_insensitive(true)
            .size_limit(RULE_SIZE_LIMIT)
            .build()
            .map_err(|source| RuleCompileError::InvalidPattern {
                rule: rule.name,
                source,
            })?;
        Ok(Self {
            polarity,
            rule,
            regex,
        })
    }

    fn find_in<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = RuleMatch> + 'a {
        self.regex.find_iter(lowered).map(|found| {
            let span = found.as_str();
            let intensified = contains_intensifier(self.polarity, span);
            let delta = signed_delta(self.polarity, self.rule.weight, intensified);
            debug!(
                "rule {} matched {span:?} (intensified: {intensified}, delta: {delta})",
                self.rule.name
            );
            RuleMatch {
                rule: self.rule.name,
                polarity: self.polarity,
                span: span.to_owned(),
                intensified,
                delta,
            }
        })
    }
}

/// A rule table compiled into matchers, ready for repeated use.
///
/// The set is immutable after compilation and can be shared across threads.
///
/// # Examples
///
/// ```
/// use moodscore_core::RuleTable;
/// use moodscore_scorer::RuleSet;
///
/// # fn main() -> Result<(), moodscore_scorer::RuleCompileError> {
/// let rules = RuleSet::compile(&RuleTable::DEFAULT)?;
/// let found = rules.matches("Really HAPPY today");
/// assert_eq!(found.len(), 1);
/// assert!(found.iter().all(|m| m.intensified));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Validate and compile every rule in `table`.
    ///
    /// # Errors
    /// Returns [`RuleCompileError::InvalidWeight`] when a weight is not a
    /// finite positive number and [`RuleCompileError::InvalidPattern`] when a
    /// pattern does not compile.
    pub fn compile(table: &RuleTable) -> Result<Self, RuleCompileError> {
        let rules = table
            .iter()
            .map(|(polarity, rule)| CompiledRule::compile(polarity, *rule))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Number of compiled rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Report whether the set holds no rules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find every non-overlapping match of every rule in `text`.
    ///
    /// The text is lower-cased first. Matches are reported rule by rule in
    /// table order, positive rules first.
    #[must_use]
    pub fn matches(&self, text: &str) -> Vec<RuleMatch> {
        let lowered = text.to_lowercase();
        let haystack = lowered.as_str();
        self.rules
            .iter()
            .flat_map(|rule| rule.find_in(haystack))
            .collect()
    }
}

/// Report whether `span` contains any intensifier of `polarity` as a
/// substring, so "isolated" carries "so".
pub(crate) fn contains_intensifier(polarity: Polarity, span: &str) -> bool {
    polarity
        .intensifiers()
        .iter()
        .any(|word| span.contains(word))
}

#[expect(
    clippy::float_arithmetic,
    reason = "rule deltas scale weights by the intensifier multiplier"
)]
pub(crate) const fn signed_delta(
    polarity: Polarity,
    weight: f64,
    intensified: bool,
) -> f64 {
    let multiplier = if intensified {
        INTENSIFIER_MULTIPLIER
    } else {
        1.0
    };
    polarity.sign() * weight * multiplier
}
