//! Core types and traits for the Silt region compactor.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: the [`Unit`]
//! element trait, the [`FreeBlock`] descriptor, the [`RegionError`]
//! type, and the read-only [`FreeSpaceView`] trait consumed by
//! diagnostic renderers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod error;
pub mod traits;
pub mod unit;

pub use block::{occupied_gaps, FreeBlock};
pub use error::RegionError;
pub use traits::FreeSpaceView;
pub use unit::Unit;
