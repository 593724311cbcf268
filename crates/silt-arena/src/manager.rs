//! The region manager: a region view paired with its free-block list.
//!
//! [`RegionManager`] is built once from a caller-owned buffer. The
//! constructor scans the buffer and records every free run; from then on
//! the free list changes only through [`defragment`](RegionManager::defragment)
//! (see `compact.rs`) or an explicit [`rescan`](RegionManager::rescan).
//! The manager borrows the buffer exclusively, so the only way to change
//! units behind the free list's back is [`RegionManager::units_mut`].

use std::ops::Range;

use silt_core::{FreeBlock, FreeSpaceView, RegionError, Unit};

use crate::config::ManagerConfig;
use crate::list::BlockList;
use crate::region::Region;
use crate::scan::scan_into;
use crate::stats::CompactionStats;

/// Tracks the free space of a caller-owned region and compacts it in place.
///
/// Dropping the manager releases only the free-list nodes; the region's
/// storage belongs to the caller throughout.
#[derive(Debug)]
pub struct RegionManager<'a, T: Unit> {
    pub(crate) region: Region<'a, T>,
    pub(crate) free_list: BlockList<FreeBlock>,
    pub(crate) config: ManagerConfig,
    pub(crate) stats: CompactionStats,
}

impl<'a, T: Unit> RegionManager<'a, T> {
    /// Manage the whole of `units` with the default configuration.
    pub fn new(units: &'a mut [T]) -> Self {
        Self::with_config(units, ManagerConfig::default())
    }

    /// Manage the whole of `units` with an explicit configuration.
    pub fn with_config(units: &'a mut [T], config: ManagerConfig) -> Self {
        Self::from_region(Region::new(units), config)
    }

    /// Manage an existing region view.
    ///
    /// The capacity hint is capped at the most blocks the region can
    /// hold, one per two units rounded up.
    pub fn from_region(region: Region<'a, T>, config: ManagerConfig) -> Self {
        let capacity = config.capacity_hint.min(region.len().div_ceil(2));
        let mut free_list = BlockList::with_capacity(capacity);
        scan_into(region.units(), &mut free_list);
        Self {
            region,
            free_list,
            config,
            stats: CompactionStats::default(),
        }
    }

    /// Free blocks in ascending address order.
    pub fn free_blocks(&self) -> impl Iterator<Item = FreeBlock> + '_ {
        self.free_list.iter().copied()
    }

    /// Read access to the region's units.
    pub fn region_view(&self) -> &[T] {
        self.region.units()
    }

    /// Number of units in the region.
    pub fn len(&self) -> usize {
        self.region.len()
    }

    /// Whether the region covers no units.
    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
    }

    /// Number of tracked free blocks.
    pub fn free_block_count(&self) -> usize {
        self.free_list.len()
    }

    /// Total free units across all blocks.
    pub fn free_len(&self) -> usize {
        self.free_list.iter().map(|b| b.len).sum()
    }

    /// Total occupied units.
    pub fn occupied_len(&self) -> usize {
        self.region.len() - self.free_len()
    }

    /// Whether the region already has its compacted shape: at most one
    /// free block, starting at offset 0.
    pub fn is_compacted(&self) -> bool {
        match self.free_list.len() {
            0 => true,
            1 => self.free_list.iter().all(|b| b.start == 0),
            _ => false,
        }
    }

    /// Occupied runs lying between (and around) the free blocks, in
    /// address order. Never yields an empty range.
    pub fn occupied_runs(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        FreeSpaceView::occupied_runs(self)
    }

    /// Cumulative compaction counters.
    pub fn stats(&self) -> &CompactionStats {
        &self.stats
    }

    /// Zero the compaction counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Rebuild the free list from the region's current contents.
    ///
    /// The scan never re-runs on its own; call this after writing through
    /// [`units_mut`](Self::units_mut).
    pub fn rescan(&mut self) {
        scan_into(self.region.units(), &mut self.free_list);
    }

    /// Mutable access to the raw units.
    ///
    /// Writes made here are not reflected in the free list until the next
    /// [`rescan`](Self::rescan); until then [`verify`](Self::verify)
    /// reports the mismatch and [`try_defragment`](Self::try_defragment)
    /// refuses to compact.
    pub fn units_mut(&mut self) -> &mut [T] {
        self.region.units_mut()
    }

    /// Release the region view, dropping the free list.
    pub fn into_region(self) -> Region<'a, T> {
        self.region
    }

    /// Check the free list against the region's contents.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found: a block out of bounds,
    /// empty, out of order, touching its predecessor, or containing an
    /// occupied unit; or a free unit outside every block.
    pub fn verify(&self) -> Result<(), RegionError> {
        let units = self.region.units();
        let mut cursor = 0usize;
        let mut previous_end: Option<usize> = None;

        for block in self.free_list.iter() {
            if block.is_empty() {
                return Err(RegionError::EmptyBlock { start: block.start });
            }
            if block.end() > units.len() {
                return Err(RegionError::BlockOutOfBounds {
                    start: block.start,
                    len: block.len,
                    region_len: units.len(),
                });
            }
            if let Some(end) = previous_end {
                if block.start < end {
                    return Err(RegionError::BlocksOutOfOrder {
                        previous_end: end,
                        start: block.start,
                    });
                }
                if block.start == end {
                    return Err(RegionError::AdjacentBlocks { offset: end });
                }
            }
            if let Some(offset) = first_free(&units[cursor..block.start]) {
                return Err(RegionError::UntrackedFreeUnit {
                    offset: cursor + offset,
                });
            }
            if let Some(offset) = units[block.range()].iter().position(|u| !u.is_free()) {
                return Err(RegionError::OccupiedUnitInBlock {
                    offset: block.start + offset,
                });
            }
            cursor = block.end();
            previous_end = Some(cursor);
        }

        if let Some(offset) = first_free(&units[cursor..]) {
            return Err(RegionError::UntrackedFreeUnit {
                offset: cursor + offset,
            });
        }
        Ok(())
    }
}

impl<T: Unit> FreeSpaceView for RegionManager<'_, T> {
    type Unit = T;

    fn free_blocks(&self) -> impl Iterator<Item = FreeBlock> + '_ {
        RegionManager::free_blocks(self)
    }

    fn region_view(&self) -> &[T] {
        RegionManager::region_view(self)
    }
}

fn first_free<T: Unit>(units: &[T]) -> Option<usize> {
    units.iter().position(|u| u.is_free())
}
