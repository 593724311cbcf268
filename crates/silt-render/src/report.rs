//! The one-line free-space report.

use std::fmt::{self, Write};
use std::ops::Range;

use silt_core::{FreeSpaceView, Unit};
use smallvec::SmallVec;

/// Occupied spans of a region, in address order.
///
/// Inline capacity covers the common case of a handful of runs without
/// touching the heap.
pub type OccupiedRuns = SmallVec<[Range<usize>; 8]>;

/// Collect the non-empty occupied spans between the free blocks of `view`.
///
/// Blocks reaching past the end of the region are clamped to it, so a
/// stale free list renders instead of panicking.
pub fn occupied_runs<V: FreeSpaceView>(view: &V) -> OccupiedRuns {
    view.occupied_runs().collect()
}

/// Write the report line for `view` into `out`, including the trailing
/// newline.
pub fn write_report<V: FreeSpaceView, W: Write>(view: &V, out: &mut W) -> fmt::Result {
    out.write_str("Free block length: ")?;
    let mut blocks = 0usize;
    for block in view.free_blocks() {
        if blocks > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", block.len)?;
        blocks += 1;
    }
    if blocks == 0 {
        out.write_char('0')?;
    }

    out.write_str(" | Occupied block contents: ")?;
    let units = view.region_view();
    for (i, run) in occupied_runs(view).into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        for unit in &units[run] {
            out.write_char(unit.to_glyph())?;
        }
    }
    out.write_char('\n')
}

/// Render the report line for `view` as an owned string.
pub fn render<V: FreeSpaceView>(view: &V) -> String {
    Report(view).to_string()
}

/// [`Display`](fmt::Display) adapter over a [`FreeSpaceView`].
///
/// ```rust
/// use silt_arena::RegionManager;
/// use silt_render::Report;
///
/// let mut units = [0u8, b'O', b'K', 0];
/// let mm = RegionManager::new(&mut units);
/// assert_eq!(
///     Report(&mm).to_string(),
///     "Free block length: 1, 1 | Occupied block contents: OK\n"
/// );
/// ```
pub struct Report<'a, V>(pub &'a V);

impl<V: FreeSpaceView> fmt::Display for Report<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(self.0, f)
    }
}
