//! Seeded random region generators.
//!
//! Regions are built as alternating-ish runs: each run picks a length in
//! `1..=max_run` and is free with probability `free_ratio`. Occupied
//! units are uppercase ASCII so generated regions stay readable in a
//! rendered report. The same shape and seed always produce the same
//! region.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Parameters for [`fragmented_region`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionShape {
    /// Region length in units.
    pub len: usize,
    /// Probability that a run is free. Clamped to `[0, 1]`.
    pub free_ratio: f64,
    /// Longest run, in units. Zero is treated as one.
    pub max_run: usize,
}

impl RegionShape {
    /// A region of `len` units, half free, with runs of up to 8 units.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            free_ratio: 0.5,
            max_run: 8,
        }
    }

    /// Set the probability that a run is free.
    pub fn free_ratio(mut self, free_ratio: f64) -> Self {
        self.free_ratio = free_ratio;
        self
    }

    /// Set the longest run length.
    pub fn max_run(mut self, max_run: usize) -> Self {
        self.max_run = max_run;
        self
    }
}

/// Generate a deterministic fragmented region.
pub fn fragmented_region(shape: RegionShape, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let free_ratio = if shape.free_ratio.is_nan() {
        0.0
    } else {
        shape.free_ratio.clamp(0.0, 1.0)
    };
    let max_run = shape.max_run.max(1);

    let mut units = Vec::with_capacity(shape.len);
    while units.len() < shape.len {
        let run = rng.random_range(1..=max_run).min(shape.len - units.len());
        let free = rng.random_bool(free_ratio);
        for _ in 0..run {
            let unit = if free {
                0
            } else {
                rng.random_range(u32::from(b'A')..=u32::from(b'Z'))
            };
            units.push(unit);
        }
    }
    units
}
