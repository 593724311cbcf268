//! Diagnostic text rendering for Silt free-space views.
//!
//! Renders any [`FreeSpaceView`] as a single line:
//!
//! ```text
//! Free block length: 3, 5, 2 | Occupied block contents: CONTI, GUOU, S!
//! ```
//!
//! Free-block lengths are listed in address order (`0` when there are
//! none). Occupied runs are the maximal spans between free blocks, each
//! printed as its units' glyphs (see [`Unit::to_glyph`](silt_core::Unit::to_glyph)).
//! The renderer only reads; it never touches the region or its free list.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod report;

pub use report::{occupied_runs, render, write_report, OccupiedRuns, Report};
