//! Free-block descriptors.

use std::fmt;
use std::ops::Range;

/// A run of consecutive free units inside a region.
///
/// `start` is an offset relative to the region's first unit. Descriptors
/// produced by a scan describe maximal runs and always have `len >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FreeBlock {
    /// Offset of the first free unit.
    pub start: usize,
    /// Number of consecutive free units.
    pub len: usize,
}

impl FreeBlock {
    /// Create a descriptor covering `len` units from `start`.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last free unit.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The covered offsets as a range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Whether `offset` lies inside this block.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.range().contains(&offset)
    }

    /// Whether this descriptor covers no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for FreeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// Complement of `blocks` within `0..len`, skipping empty gaps.
///
/// Blocks are clamped to `0..len`, and a block starting before the end
/// of the previous one only extends the covered span. A stale or
/// unordered list therefore still yields disjoint, in-bounds ranges.
pub fn occupied_gaps(
    blocks: impl Iterator<Item = FreeBlock>,
    len: usize,
) -> impl Iterator<Item = Range<usize>> {
    let mut cursor = 0usize;
    let mut blocks = blocks.fuse();
    let mut done = false;
    std::iter::from_fn(move || {
        while !done {
            match blocks.next() {
                Some(block) => {
                    let gap = cursor..block.start.min(len);
                    cursor = cursor.max(block.start.saturating_add(block.len).min(len));
                    if !gap.is_empty() {
                        return Some(gap);
                    }
                }
                None => {
                    done = true;
                    let tail = cursor..len;
                    if !tail.is_empty() {
                        return Some(tail);
                    }
                }
            }
        }
        None
    })
}
