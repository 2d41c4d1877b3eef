//! Runtime layer for the health sensor report.
//!
//! Wires the data-layer stages into a single batch run with explicit paths.

pub mod orchestrator;

pub use report_core as core;
pub use report_data as data;
