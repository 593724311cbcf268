//! Silt: in-place compaction of fixed-size unit regions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Silt sub-crates. For most users, adding `silt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! // Zero marks a free unit; anything else is occupied.
//! let mut units: Vec<u8> = b"...CONTI.....GUOU..S!"
//!     .iter()
//!     .map(|&b| if b == b'.' { 0 } else { b })
//!     .collect();
//!
//! let mut mm = RegionManager::new(&mut units);
//! assert_eq!(
//!     render(&mm),
//!     "Free block length: 3, 5, 2 | Occupied block contents: CONTI, GUOU, S!\n"
//! );
//!
//! mm.defragment();
//! assert_eq!(mm.free_blocks().collect::<Vec<_>>(), [FreeBlock::new(0, 10)]);
//! assert_eq!(
//!     Report(&mm).to_string(),
//!     "Free block length: 10 | Occupied block contents: CONTIGUOUS!\n"
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | `Unit`, `FreeBlock`, `RegionError`, `FreeSpaceView` |
//! | [`arena`] | `silt-arena` | `Region`, `BlockList`, `RegionManager`, compaction |
//! | [`render`] | `silt-render` | The one-line diagnostic report |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`silt-core`).
///
/// Contains the [`types::Unit`] element trait, the [`types::FreeBlock`]
/// descriptor, [`types::RegionError`], and the read-only
/// [`types::FreeSpaceView`] trait.
pub use silt_core as types;

/// Region views, the free-block list, and compaction (`silt-arena`).
///
/// [`arena::RegionManager`] is the main entry point; it is also available
/// in the [`prelude`].
pub use silt_arena as arena;

/// Diagnostic rendering (`silt-render`).
///
/// [`render::render`] and [`render::Report`] print any
/// [`types::FreeSpaceView`] as a single report line.
pub use silt_render as render;

/// Common imports for typical Silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use silt_core::{FreeBlock, FreeSpaceView, RegionError, Unit};

    // Manager and configuration
    pub use silt_arena::{CompactionStats, ManagerConfig, Region, RegionManager, VerifyMode};

    // Rendering
    pub use silt_render::{render, write_report, Report};
}
