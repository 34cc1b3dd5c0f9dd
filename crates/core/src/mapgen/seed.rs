//! Seed resolution and the single pseudo-random stream shared by every generation stage.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::config::SizeRange;

static UNSEEDED_RUNS: AtomicU64 = AtomicU64::new(0);

/// Sequentially consumed random stream. Stages borrow it mutably in pipeline order,
/// so a fixed seed replays the same draws.
pub struct DungeonRng {
    inner: ChaCha8Rng,
}

impl DungeonRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.inner.next_u64() % bound as u64) as usize
    }

    /// Uniform integer in `[range.min, range.max)`; degenerates to `min` when the range is empty.
    pub fn in_range(&mut self, range: SizeRange) -> u32 {
        if range.max <= range.min {
            return range.min;
        }
        let span = u64::from(range.max - range.min);
        range.min + (self.inner.next_u64() % span) as u32
    }

    /// Choose `count` distinct elements uniformly at random (partial Fisher-Yates).
    /// Returns every element, shuffled, when `count >= items.len()`.
    pub fn sample_without_replacement<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        let take = count.min(pool.len());
        for index in 0..take {
            let pick = index + self.below(pool.len() - index);
            pool.swap(index, pick);
        }
        pool.truncate(take);
        pool
    }
}

pub(crate) fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(generate_runtime_seed)
}

/// Seed for runs that did not configure one. Mixes the wall clock, the process id and a
/// per-process draw count, so two calls in the same nanosecond still differ.
pub fn generate_runtime_seed() -> u64 {
    let clock = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let draw = UNSEEDED_RUNS.fetch_add(1, Ordering::Relaxed);
    let process = u64::from(process::id()) << 32;
    splitmix64(clock ^ process ^ draw.wrapping_mul(GOLDEN_GAMMA))
}

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 output step. A bijection, so distinct inputs never collide.
fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
