//! Read-only access to a managed region and its free list.

use std::ops::Range;

use crate::block::{occupied_gaps, FreeBlock};
use crate::unit::Unit;

/// Read-only view of a region together with its free-block list.
///
/// This trait decouples diagnostic renderers from the manager that owns
/// the free list: a renderer reads through `&impl FreeSpaceView` and
/// never sees the list's internal node layout.
pub trait FreeSpaceView {
    /// The element type of the region.
    type Unit: Unit;

    /// Free blocks in ascending address order.
    ///
    /// Each call starts a fresh pass from the lowest address.
    fn free_blocks(&self) -> impl Iterator<Item = FreeBlock> + '_;

    /// The raw units of the region.
    fn region_view(&self) -> &[Self::Unit];

    /// Occupied spans between the free blocks, in address order.
    ///
    /// See [`occupied_gaps`] for how stale blocks are clamped.
    fn occupied_runs(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        occupied_gaps(self.free_blocks(), self.region_view().len())
    }
}
