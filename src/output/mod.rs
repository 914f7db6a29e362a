//! Output module for the persisted collection and derived artifacts
//!
//! This module handles:
//! - Writing and reloading the persisted JSON collection
//! - Generating the plain-text market summary for downstream analysis
//! - Computing and printing harvest statistics

pub mod collection;
pub mod stats;
pub mod summary;

pub use collection::{load_collection, write_collection};
pub use stats::{compute_statistics, print_statistics, HarvestStatistics};
pub use summary::{market_summary, write_summary, DESCRIPTION_PREVIEW_CHARS};
