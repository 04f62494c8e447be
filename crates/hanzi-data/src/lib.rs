//! Data layer for the hanzi statistics tool.
//!
//! Reads the line-delimited dictionary, counts radicals, decomposition
//! layouts and etymology types, and renders the ranked report.

pub mod aggregator;
pub mod analysis;
pub mod reader;
pub mod report;

pub use hanzi_core as core;
