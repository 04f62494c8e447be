//! Shared types for the hanzi statistics tool.
//!
//! Holds the dictionary record model, the error type and the command-line
//! settings used by the data and binary crates.

pub mod error;
pub mod models;
pub mod settings;

pub use error::{Result, StatsError};
