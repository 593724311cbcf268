//! Error types for region views and free-list verification.

use std::error::Error;
use std::fmt;

/// Errors reported when a region view or its free list breaks the
/// caller contract.
///
/// Compaction itself is infallible. These errors come only from the
/// checked surfaces: building a window over a larger buffer, and
/// verifying a free list against the units it describes (for example
/// after the caller mutated the region behind the manager's back).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// A requested window does not fit inside the backing buffer.
    WindowOutOfBounds {
        /// First unit of the requested window.
        start: usize,
        /// Requested window length in units.
        len: usize,
        /// Length of the backing buffer.
        buffer_len: usize,
    },
    /// A descriptor extends past the end of the region.
    BlockOutOfBounds {
        /// Descriptor start offset.
        start: usize,
        /// Descriptor length.
        len: usize,
        /// Region length in units.
        region_len: usize,
    },
    /// A descriptor covers zero units.
    EmptyBlock {
        /// Descriptor start offset.
        start: usize,
    },
    /// A descriptor starts before the previous one ends.
    BlocksOutOfOrder {
        /// End of the previous descriptor.
        previous_end: usize,
        /// Start of the offending descriptor.
        start: usize,
    },
    /// Two descriptors touch, so neither describes a maximal run.
    AdjacentBlocks {
        /// Offset where the two descriptors meet.
        offset: usize,
    },
    /// A unit inside a descriptor holds occupied data.
    OccupiedUnitInBlock {
        /// Offset of the occupied unit.
        offset: usize,
    },
    /// A free unit is not covered by any descriptor.
    UntrackedFreeUnit {
        /// Offset of the free unit.
        offset: usize,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowOutOfBounds {
                start,
                len,
                buffer_len,
            } => {
                write!(
                    f,
                    "window {start}+{len} exceeds buffer of {buffer_len} units"
                )
            }
            Self::BlockOutOfBounds {
                start,
                len,
                region_len,
            } => {
                write!(
                    f,
                    "free block {start}+{len} exceeds region of {region_len} units"
                )
            }
            Self::EmptyBlock { start } => write!(f, "empty free block at offset {start}"),
            Self::BlocksOutOfOrder {
                previous_end,
                start,
            } => {
                write!(
                    f,
                    "free block at {start} overlaps or precedes previous block ending at {previous_end}"
                )
            }
            Self::AdjacentBlocks { offset } => {
                write!(f, "free blocks meet at offset {offset} without coalescing")
            }
            Self::OccupiedUnitInBlock { offset } => {
                write!(f, "occupied unit at offset {offset} inside a free block")
            }
            Self::UntrackedFreeUnit { offset } => {
                write!(f, "free unit at offset {offset} is not tracked by any block")
            }
        }
    }
}

impl Error for RegionError {}
