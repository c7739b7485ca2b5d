//! Random jitter sources backed by `rand`.
#![forbid(unsafe_code)]

use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

use moodscore_core::{JITTER_AMPLITUDE, Jitter};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Closed window every jitter value is drawn from and clamped into.
#[expect(
    clippy::float_arithmetic,
    reason = "the lower bound negates the jitter amplitude"
)]
pub(crate) fn jitter_window() -> RangeInclusive<f64> {
    -JITTER_AMPLITUDE..=JITTER_AMPLITUDE
}

/// Production jitter drawn uniformly from `[-5.0, +5.0]`.
///
/// Uses the thread-local generator, so concurrent scorers never contend.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformJitter;

impl Jitter for UniformJitter {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(jitter_window())
    }
}

/// Reproducible jitter from a seeded `ChaCha8` stream.
///
/// Draws are serialised through a mutex so a given seed always yields the same
/// sequence, whichever thread asks.
///
/// # Examples
///
/// ```
/// use moodscore_core::Jitter;
/// use moodscore_scorer::SeededJitter;
///
/// let first = SeededJitter::new(7);
/// let second = SeededJitter::new(7);
/// assert_eq!(first.sample().to_bits(), second.sample().to_bits());
/// ```
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededJitter {
    /// Start a new stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Jitter for SeededJitter {
    fn sample(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(jitter_window())
    }
}
