//! Single-pass free-space scanner.
//!
//! Walks a unit slice once and records every maximal run of free units
//! as a [`FreeBlock`], in ascending address order.

use silt_core::{FreeBlock, Unit};
use tracing::debug;

use crate::list::BlockList;

/// Build a free-block list from the current contents of `units`.
pub fn scan<T: Unit>(units: &[T]) -> BlockList<FreeBlock> {
    let mut blocks = BlockList::new();
    scan_into(units, &mut blocks);
    blocks
}

/// Replace the contents of `blocks` with the free runs of `units`.
///
/// Reuses `blocks`' node storage.
pub fn scan_into<T: Unit>(units: &[T], blocks: &mut BlockList<FreeBlock>) {
    blocks.clear();

    let mut run: Option<FreeBlock> = None;
    let mut free_total = 0usize;
    for (offset, unit) in units.iter().enumerate() {
        if unit.is_free() {
            match run.as_mut() {
                Some(open) => open.len += 1,
                None => run = Some(FreeBlock::new(offset, 1)),
            }
        } else if let Some(closed) = run.take() {
            free_total += closed.len;
            blocks.push_back(closed);
        }
    }
    if let Some(trailing) = run {
        free_total += trailing.len;
        blocks.push_back(trailing);
    }

    debug!(
        units = units.len(),
        blocks = blocks.len(),
        free_units = free_total,
        "scanned region"
    );
}
