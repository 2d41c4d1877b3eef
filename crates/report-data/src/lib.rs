//! Data layer for the health sensor report.
//!
//! Loads readings from CSV, runs the analysis step over them and writes the
//! finished report back to disk.

pub mod analysis;
pub mod reader;
pub mod writer;

pub use report_core as core;
