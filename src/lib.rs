//! Batch classification of the unsigs catalog.
//!
//! Two independent jobs share the catalog loader:
//! - `generate-monochromes` writes the ascending ids of monochrome unsigs.
//! - `generate-noliners` writes the ids of no-liners in catalog order.

pub mod classify;
pub mod config;
pub mod data;
pub mod error;
pub mod job;
pub mod output;
