//! Injectable randomness for word draws and hint letter selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices. Everything random in a game goes through this.
pub trait RandomSource {
    /// Return an index in `0..upper`. Callers never pass `upper == 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Production source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source, used by `--seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound so any script is valid.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always answers 0: first word, first remaining letter, and so on.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % upper
    }
}

/// Pick `count` distinct items uniformly (partial Fisher-Yates).
///
/// `count` is capped at `items.len()`.
pub fn choose_distinct<T: Copy, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &[T],
    count: usize,
) -> Vec<T> {
    let mut pool = items.to_vec();
    let count = count.min(pool.len());
    for i in 0..count {
        let j = i + rng.next_index(pool.len() - i);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}
