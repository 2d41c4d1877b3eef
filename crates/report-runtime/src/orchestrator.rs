//! Batch report orchestrator.
//!
//! Sequences load → analysis → formatting → write for one run. Any failure
//! stops the run before the report file is touched.

use std::path::{Path, PathBuf};
use std::time::Instant;

use report_core::error::Result;
use report_core::settings::{Settings, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use report_data::analysis::analyze_readings;
use report_data::reader::load_readings;
use report_data::writer::save_report;

// ── Public types ──────────────────────────────────────────────────────────────

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// CSV file to read.
    pub input: PathBuf,
    /// Text file to create or truncate.
    pub output: PathBuf,
}

impl ReportPaths {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl From<&Settings> for ReportPaths {
    fn from(s: &Settings) -> Self {
        Self::new(s.input.clone(), s.output.clone())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of readings in the input file.
    pub total_readings: usize,
    /// Where the report was written.
    pub output_path: PathBuf,
    /// Wall-clock seconds spent loading the CSV file.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent on statistics and anomaly detection.
    pub analysis_time_seconds: f64,
}

// ── ReportOrchestrator ────────────────────────────────────────────────────────

/// Single-shot pipeline runner. Holds no state between runs.
pub struct ReportOrchestrator {
    paths: ReportPaths,
}

impl ReportOrchestrator {
    pub fn new(paths: ReportPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ReportPaths {
        &self.paths
    }

    /// Run the pipeline once. No retries; the first error is returned as is.
    pub fn run(&self) -> Result<RunSummary> {
        let input: &Path = &self.paths.input;
        let output: &Path = &self.paths.output;

        tracing::info!("Loading readings from {}", input.display());
        let load_start = Instant::now();
        let readings = load_readings(input)?;
        let load_time = load_start.elapsed().as_secs_f64();

        let analysis = analyze_readings(&readings)?;
        let report = analysis.to_report();

        save_report(&report, output)?;
        tracing::info!(
            "Report for {} readings written to {}",
            analysis.total_readings,
            output.display()
        );

        let summary = RunSummary {
            total_readings: analysis.total_readings,
            output_path: output.to_path_buf(),
            load_time_seconds: load_time,
            analysis_time_seconds: analysis.metadata.analysis_time_seconds,
        };
        tracing::debug!("Run summary: {:?}", summary);

        Ok(summary)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
