//! Cumulative compaction counters.

/// Work performed by a [`RegionManager`](crate::RegionManager) across all
/// of its `defragment()` calls.
///
/// Counters only ever increase until [`reset`](Self::reset). They are
/// maintained unconditionally; reading them is free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompactionStats {
    /// Number of `defragment()` calls, including no-op calls.
    pub defragment_calls: u64,
    /// Number of tail merges (two free blocks coalesced into one).
    pub merges: u64,
    /// Number of times the merged block was relocated to the region front.
    pub relocations: u64,
    /// Occupied units copied to a new position.
    pub units_moved: u64,
    /// Units overwritten with the free sentinel after a move.
    pub units_zeroed: u64,
}

impl CompactionStats {
    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_move(&mut self, moved: usize, zeroed: usize) {
        self.units_moved += moved as u64;
        self.units_zeroed += zeroed as u64;
    }
}
