//! Benchmark profiles for the Silt region compactor.
//!
//! Each profile is a deterministic, seeded region shape:
//!
//! - [`reference_profile`]: 4K units, half free, short runs
//! - [`stress_profile`]: 1M units, heavily fragmented
//! - [`sparse_profile`]: 64K units, mostly occupied with long runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silt_test_utils::{fragmented_region, RegionShape};

/// Build a reference region: 4096 units, half free, runs of up to 8.
pub fn reference_profile(seed: u64) -> Vec<u32> {
    fragmented_region(RegionShape::new(4096), seed)
}

/// Build a stress region: 2^20 units, half free, runs of up to 4.
pub fn stress_profile(seed: u64) -> Vec<u32> {
    fragmented_region(RegionShape::new(1 << 20).max_run(4), seed)
}

/// Build a sparse region: 65536 units, one run in ten free, runs of up
/// to 256.
pub fn sparse_profile(seed: u64) -> Vec<u32> {
    fragmented_region(RegionShape::new(1 << 16).free_ratio(0.1).max_run(256), seed)
}

/// Count the free units of a region.
pub fn free_units<T: silt_core::Unit>(units: &[T]) -> usize {
    units.iter().filter(|u| u.is_free()).count()
}
