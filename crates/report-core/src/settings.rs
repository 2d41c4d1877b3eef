use clap::Parser;
use std::path::PathBuf;

use crate::error::{ReportError, Result};

/// Input file read when `--input` is not given.
pub const DEFAULT_INPUT_PATH: &str = "health_data.csv";
/// Report destination used when `--output` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "output/analysis_report.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Analyse health sensor readings and write a text report
#[derive(Parser, Debug, Clone)]
#[command(
    name = "health-report",
    about = "Analyse health sensor readings and write a text report",
    version
)]
pub struct Settings {
    /// CSV file with one reading per row after a header line
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Destination of the text report
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply derived values.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Reject paths the pipeline cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.output.file_name().is_none() {
            return Err(ReportError::Config(format!(
                "output path {} has no file name",
                self.output.display()
            )));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
