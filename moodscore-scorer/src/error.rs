//! Error types raised while compiling rule tables.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while turning a [`RuleTable`](moodscore_core::RuleTable)
/// into matchers.
#[derive(Debug, Error)]
pub enum RuleCompileError {
    /// A rule's weight was zero, negative or not finite.
    #[error("rule {rule} has weight {weight}; weights must be finite and positive")]
    InvalidWeight {
        /// Name of the offending rule.
        rule: &'static str,
        /// Weight found in the table.
        weight: f64,
    },
    /// A rule's pattern failed to compile.
    #[error("rule {rule} has an invalid pattern")]
    InvalidPattern {
        /// Name of the offending rule.
        rule: &'static str,
        /// Source error from `regex`.
        #[source]
        source: regex::Error,
    },
}
