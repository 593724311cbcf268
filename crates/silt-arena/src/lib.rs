//! Free-space tracking and in-place compaction over caller-owned regions.
//!
//! A [`RegionManager`] borrows a unit buffer, scans it once for runs of
//! free units, and can then compact it so that all free space forms a
//! single block at the front while occupied units keep their order.
//!
//! # Architecture
//!
//! ```text
//! RegionManager (orchestrator)
//! ├── Region (non-owning &mut [T] view: shift + zero-fill primitives)
//! ├── BlockList<FreeBlock> (index-linked list, sentinel at slot 0)
//! │   └── built by scan() at construction / rescan()
//! ├── ManagerConfig (verification policy, list capacity hint)
//! └── CompactionStats (cumulative merge/move counters)
//! ```
//!
//! # Example
//!
//! ```rust
//! use silt_arena::RegionManager;
//!
//! let mut units = [0i32, 7, 0, 0, 8, 9, 0];
//! let mut mm = RegionManager::new(&mut units);
//! assert_eq!(mm.free_block_count(), 3);
//!
//! mm.defragment();
//! assert_eq!(mm.free_block_count(), 1);
//! drop(mm);
//! assert_eq!(units, [0, 0, 0, 0, 7, 8, 9]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod compact;
pub mod config;
pub mod list;
pub mod manager;
pub mod region;
pub mod scan;
pub mod stats;

// Public re-exports for the primary API surface.
pub use config::{ManagerConfig, VerifyMode};
pub use list::{BlockList, Cursor};
pub use manager::RegionManager;
pub use region::Region;
pub use scan::{scan, scan_into};
pub use stats::CompactionStats;
