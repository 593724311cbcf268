//! Test fixtures and region generators for Silt development.
//!
//! - [`fixtures`]: the named acceptance scenarios, each a region layout
//!   with its expected diagnostic line before and after compaction.
//! - [`generate`]: seeded random regions for stress tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod generate;

pub use fixtures::{ascii_units, catalog, Scenario};
pub use generate::{fragmented_region, RegionShape};
