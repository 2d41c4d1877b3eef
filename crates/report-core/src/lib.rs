//! Domain layer for the health sensor report.
//!
//! Holds the reading schema, the error taxonomy, mean and threshold
//! calculations, report text formatting and command-line settings.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
