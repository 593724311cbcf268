//! In-place compaction of a managed region.
//!
//! Compaction runs in two phases over the free list:
//!
//! 1. **Tail merge.** While more than one block remains, take the last
//!    block and its predecessor, slide the occupied run between them
//!    right by the last block's length, zero the vacated units, grow the
//!    predecessor by that length, and erase the last block. Each pass
//!    removes exactly one block and keeps the occupied run's order.
//! 2. **Front relocation.** If the single surviving block does not start
//!    at offset 0, slide the leading occupied run right by the block's
//!    length and move the block to offset 0.
//!
//! ```text
//!   before:  . . . C O N T I . . . . . G U O U . . S !
//!   phase 1: . . . C O N T I . . . . . . . G U O U S !
//!            . . . . . . . . . . C O N T I G U O U S !   (after 2nd pass)
//!   phase 2: already at the front; nothing to do
//! ```
//!
//! Free space ends up as one block at the front of the region and the
//! occupied units follow it in their original order. A second call finds
//! the region already in that shape and does nothing.

use silt_core::{RegionError, Unit};
use tracing::{debug, trace};

use crate::manager::RegionManager;

impl<T: Unit> RegionManager<'_, T> {
    /// Collapse all free space into a single block at the front of the
    /// region, preserving the order of occupied units.
    ///
    /// Returns `self` so calls can be chained. Idempotent.
    ///
    /// # Panics
    ///
    /// When the configured [`VerifyMode`](crate::VerifyMode) is enabled,
    /// panics if the free list no longer matches the region (see
    /// [`verify`](Self::verify)). Use [`try_defragment`](Self::try_defragment)
    /// to get the mismatch as an error instead.
    pub fn defragment(&mut self) -> &mut Self {
        if self.config.verify.enabled() {
            if let Err(e) = self.verify() {
                panic!("defragment on inconsistent free list: {e}");
            }
        }
        self.compact();
        self
    }

    /// Verify the free list against the region, then compact it.
    ///
    /// # Errors
    ///
    /// Returns the [`RegionError`] from [`verify`](Self::verify) without
    /// touching the region if the free list is inconsistent.
    pub fn try_defragment(&mut self) -> Result<&mut Self, RegionError> {
        self.verify()?;
        self.compact();
        Ok(self)
    }

    fn compact(&mut self) {
        self.stats.defragment_calls += 1;
        let blocks_before = self.free_list.len();

        self.merge_from_tail();
        let relocated = self.relocate_to_front();

        debug!(
            region_len = self.region.len(),
            blocks_before,
            free_units = self.free_len(),
            relocated,
            "defragmented region"
        );
    }

    fn merge_from_tail(&mut self) {
        while self.free_list.len() > 1 {
            let Some(last_at) = self.free_list.last() else {
                break;
            };
            let before_at = self.free_list.prev(last_at);
            let (Some(&last), Some(&before)) =
                (self.free_list.get(last_at), self.free_list.get(before_at))
            else {
                break;
            };

            let occupied_start = before.end();
            // Zero when two blocks touch; a scan never produces that.
            let occupied_len = last.start.saturating_sub(occupied_start);

            self.region.shift_right(occupied_start, occupied_len, last.len);
            self.region.fill_free(occupied_start, last.len);

            if let Some(merged) = self.free_list.get_mut(before_at) {
                merged.len += last.len;
            }
            self.free_list.erase(last_at);

            self.stats.merges += 1;
            self.stats.record_move(occupied_len, last.len);
            trace!(
                merged_into = before.start,
                absorbed = %last,
                occupied_len,
                "merged tail free block"
            );
        }
    }

    fn relocate_to_front(&mut self) -> bool {
        if self.free_list.len() != 1 {
            return false;
        }
        let first_at = self.free_list.begin();
        let Some(&block) = self.free_list.get(first_at) else {
            return false;
        };
        if block.start == 0 {
            return false;
        }

        self.region.shift_right(0, block.start, block.len);
        self.region.fill_free(0, block.len);
        if let Some(front) = self.free_list.get_mut(first_at) {
            front.start = 0;
        }

        self.stats.relocations += 1;
        self.stats.record_move(block.start, block.len);
        trace!(from = block.start, len = block.len, "relocated free block to front");
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ManagerConfig, VerifyMode};
    use crate::manager::RegionManager;
    use silt_core::{FreeBlock, RegionError};

    fn ascii(s: &str) -> Vec<i32> {
        s.bytes().map(|b| if b == b'.' { 0 } else { b as i32 }).collect()
    }

    fn compact(s: &str) -> (Vec<i32>, Vec<FreeBlock>) {
        let mut buf = ascii(s);
        let blocks = {
            let mut mm = RegionManager::new(&mut buf);
            mm.defragment();
            mm.free_blocks().collect()
        };
        (buf, blocks)
    }

    #[test]
    fn contiguous_example() {
        let (units, blocks) = compact("...CONTI.....GUOU..S!");
        assert_eq!(units, ascii("..........CONTIGUOUS!"));
        assert_eq!(blocks, vec![FreeBlock::new(0, 10)]);
    }

    #[test]
    fn symmetric_free_runs_merge() {
        let (units, blocks) = compact("..AA..");
        assert_eq!(units, ascii("....AA"));
        assert_eq!(blocks, vec![FreeBlock::new(0, 4)]);
    }

    #[test]
    fn interior_free_runs_merge_to_front() {
        let (units, blocks) = compact("AA..BBB...CCCC");
        assert_eq!(units, ascii(".....AABBBCCCC"));
        assert_eq!(blocks, vec![FreeBlock::new(0, 5)]);
    }

    #[test]
    fn single_trailing_block_moves_to_front() {
        let (units, blocks) = compact("AA..");
        assert_eq!(units, ascii("..AA"));
        assert_eq!(blocks, vec![FreeBlock::new(0, 2)]);
    }

    #[test]
    fn alternating_single_units() {
        let (units, blocks) = compact(".A.B");
        assert_eq!(units, ascii("..AB"));
        assert_eq!(blocks, vec![FreeBlock::new(0, 2)]);
    }

    #[test]
    fn short_occupied_run_between_long_free_runs() {
        let (units, blocks) = compact("X.....Y......Z");
        assert_eq!(units, ascii("...........XYZ"));
        assert_eq!(blocks, vec![FreeBlock::new(0, 11)]);
    }

    #[test]
    fn degenerate_regions_are_untouched() {
        assert_eq!(compact(""), (vec![], vec![]));
        assert_eq!(compact("A"), (ascii("A"), vec![]));
        assert_eq!(compact("."), (ascii("."), vec![FreeBlock::new(0, 1)]));
        assert_eq!(
            compact(".........."),
            (ascii(".........."), vec![FreeBlock::new(0, 10)])
        );
        assert_eq!(compact("AAAAAAAAAA"), (ascii("AAAAAAAAAA"), vec![]));
        assert_eq!(compact("..AA"), (ascii("..AA"), vec![FreeBlock::new(0, 2)]));
    }

    #[test]
    fn defragment_chains_and_is_idempotent() {
        let mut buf = ascii("..A.B..C");
        let mut mm = RegionManager::new(&mut buf);
        mm.defragment().defragment();
        let blocks: Vec<_> = mm.free_blocks().collect();
        assert_eq!(blocks, vec![FreeBlock::new(0, 5)]);
        assert_eq!(mm.stats().defragment_calls, 2);
        assert!(mm.is_compacted());
        drop(mm);
        assert_eq!(buf, ascii(".....ABC"));
    }

    #[test]
    fn stats_count_moves_and_zeroes() {
        let mut buf = ascii("AA..BBB...CCCC");
        let mut mm = RegionManager::new(&mut buf);
        mm.defragment();
        let stats = mm.stats().clone();
        assert_eq!(stats.merges, 1);
        assert_eq!(stats.relocations, 1);
        assert_eq!(stats.units_moved, 3 + 2);
        assert_eq!(stats.units_zeroed, 3 + 5);

        mm.defragment();
        assert_eq!(mm.stats().merges, 1);
        assert_eq!(mm.stats().relocations, 1);
        assert_eq!(mm.stats().defragment_calls, 2);
    }

    #[test]
    fn adjacent_blocks_merge_without_moving_data() {
        let mut buf = ascii("A...");
        let mut mm = RegionManager::with_config(
            &mut buf,
            ManagerConfig::new().with_verify(VerifyMode::Never),
        );
        mm.free_list.clear();
        mm.free_list.push_back(FreeBlock::new(1, 1));
        mm.free_list.push_back(FreeBlock::new(2, 2));
        mm.defragment();
        let blocks: Vec<_> = mm.free_blocks().collect();
        assert_eq!(blocks, vec![FreeBlock::new(0, 3)]);
        drop(mm);
        assert_eq!(buf, ascii("...A"));
    }

    #[test]
    fn try_defragment_rejects_stale_list() {
        let mut buf = ascii("AB..C");
        let mut mm = RegionManager::new(&mut buf);
        mm.units_mut()[0] = 0;
        let err = mm.try_defragment().unwrap_err();
        assert_eq!(err, RegionError::UntrackedFreeUnit { offset: 0 });
        assert_eq!(mm.stats().defragment_calls, 0);
        drop(mm);
        assert_eq!(buf, ascii(".B..C"));
    }

    #[test]
    fn try_defragment_after_rescan_succeeds() {
        let mut buf = ascii("AB..C");
        let mut mm = RegionManager::new(&mut buf);
        mm.units_mut()[0] = 0;
        mm.rescan();
        mm.try_defragment().unwrap();
        drop(mm);
        assert_eq!(buf, ascii("...BC"));
    }

    #[test]
    #[should_panic(expected = "inconsistent free list")]
    fn always_verify_panics_on_stale_list() {
        let mut buf = ascii("AB..C");
        let mut mm = RegionManager::with_config(
            &mut buf,
            ManagerConfig::new().with_verify(VerifyMode::Always),
        );
        mm.units_mut()[4] = 0;
        mm.defragment();
    }

    #[test]
    fn float_units_compact() {
        let mut buf = [1.5f32, 0.0, 2.5, -0.0, 3.5];
        let mut mm = RegionManager::new(&mut buf);
        mm.defragment();
        drop(mm);
        assert_eq!(buf, [0.0, 0.0, 1.5, 2.5, 3.5]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn region_strategy() -> impl Strategy<Value = Vec<u16>> {
            // Bias toward zeros so regions are well fragmented.
            proptest::collection::vec(
                prop_oneof![3 => Just(0u16), 2 => 1u16..500],
                0..96,
            )
        }

        proptest! {
            #[test]
            fn compaction_matches_stable_partition(units in region_strategy()) {
                let free = units.iter().filter(|u| **u == 0).count();
                let mut expected = vec![0u16; free];
                expected.extend(units.iter().copied().filter(|u| *u != 0));

                let mut buf = units.clone();
                let mut mm = RegionManager::new(&mut buf);
                let free_before = mm.free_len();
                mm.defragment();

                prop_assert_eq!(mm.free_len(), free_before);
                prop_assert!(mm.free_block_count() <= 1);
                prop_assert!(mm.is_compacted());
                prop_assert!(mm.verify().is_ok());
                if let Some(block) = mm.free_blocks().next() {
                    prop_assert_eq!(block, FreeBlock::new(0, free));
                }
                drop(mm);
                prop_assert_eq!(buf, expected);
            }

            #[test]
            fn second_defragment_is_noop(units in region_strategy()) {
                let mut once = units.clone();
                let once_blocks: Vec<_> = {
                    let mut mm = RegionManager::new(&mut once);
                    mm.defragment();
                    mm.free_blocks().collect()
                };

                let mut twice = units;
                let (twice_blocks, moved_second): (Vec<_>, u64) = {
                    let mut mm = RegionManager::new(&mut twice);
                    mm.defragment();
                    let moved = mm.stats().units_moved;
                    mm.defragment();
                    (mm.free_blocks().collect(), mm.stats().units_moved - moved)
                };

                prop_assert_eq!(once, twice);
                prop_assert_eq!(once_blocks, twice_blocks);
                prop_assert_eq!(moved_second, 0);
            }

            #[test]
            fn merges_equal_blocks_minus_one(units in region_strategy()) {
                let mut buf = units;
                let mut mm = RegionManager::new(&mut buf);
                let blocks = mm.free_block_count() as u64;
                mm.defragment();
                prop_assert_eq!(mm.stats().merges, blocks.saturating_sub(1));
            }
        }
    }
}
