use crate::cards::Symbol;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

/// Parameters of a room. Defaults come from the crate constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// distinct pairs on the board, clamped to the symbol catalog
    pub pairs: usize,
    /// fixed shuffle seed, OS entropy when absent
    pub seed: Option<u64>,
    /// how long a mismatched pair stays face up
    pub delay: Duration,
    /// period of the session timer
    pub period: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pairs: crate::PAIRS,
            seed: None,
            delay: crate::MISMATCH_DELAY,
            period: crate::TICK_PERIOD,
        }
    }
}

impl Config {
    pub fn with_pairs(self, pairs: usize) -> Self {
        Self { pairs, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
    pub fn symbols(&self) -> &'static [Symbol] {
        Symbol::take(self.pairs)
    }
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}
