//! Injectable jitter sources.
//!
//! Production scoring perturbs the raw score by a small random amount so that
//! repeated submissions of the same text do not feel mechanical. The source is
//! a trait so tests and reproducible runs can pin it.

use std::sync::Arc;

/// Supply one jitter value per scoring call.
///
/// Implementations should return values within
/// `-JITTER_AMPLITUDE..=JITTER_AMPLITUDE`; scorers clamp anything outside that
/// window and replace non-finite values with `0.0`.
///
/// # Examples
///
/// ```
/// use moodscore_core::{FixedJitter, Jitter, NoJitter};
///
/// assert_eq!(NoJitter.sample(), 0.0);
/// assert_eq!(FixedJitter::new(-2.5).sample(), -2.5);
/// ```
pub trait Jitter: Send + Sync {
    /// Draw the jitter for a single scoring call.
    fn sample(&self) -> f64;
}

/// Jitter source that never perturbs the score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn sample(&self) -> f64 {
        0.0
    }
}

/// Jitter source returning the same value on every call.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FixedJitter(f64);

impl FixedJitter {
    /// Pin jitter to `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The pinned value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Jitter for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}

impl<J: Jitter + ?Sized> Jitter for Box<J> {
    fn sample(&self) -> f64 {
        (**self).sample()
    }
}

impl<J: Jitter + ?Sized> Jitter for Arc<J> {
    fn sample(&self) -> f64 {
        (**self).sample()
    }
}
