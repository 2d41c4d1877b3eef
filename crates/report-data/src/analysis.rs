//! Analysis step of the report pipeline.
//!
//! Runs the statistics calculator and the anomaly detector over a loaded
//! dataset, returning an [`AnalysisResult`] ready for formatting.

use chrono::Utc;
use report_core::calculations::{AnomalyDetector, StatisticsCalculator};
use report_core::error::Result;
use report_core::formatting::format_report;
use report_core::models::{AnomalyCounts, Reading, StatisticsSummary};
use tracing::debug;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of readings analysed.
    pub readings_processed: usize,
    /// Wall-clock seconds spent on statistics and anomaly detection.
    pub analysis_time_seconds: f64,
}

/// The complete output of [`analyze_readings`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub statistics: StatisticsSummary,
    pub anomalies: AnomalyCounts,
    /// Total number of readings in the dataset.
    pub total_readings: usize,
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Render the text report for this result.
    pub fn to_report(&self) -> String {
        format_report(&self.statistics, &self.anomalies, self.total_readings)
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Compute means and threshold counts over `readings`.
///
/// Fails with [`report_core::error::ReportError::EmptyDataset`] when there
/// is nothing to average.
pub fn analyze_readings(readings: &[Reading]) -> Result<AnalysisResult> {
    let start = std::time::Instant::now();

    let statistics = StatisticsCalculator::compute_statistics(readings)?;
    let anomalies = AnomalyDetector::default().detect_anomalies(readings);

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        readings_processed: readings.len(),
        analysis_time_seconds: start.elapsed().as_secs_f64(),
    };

    debug!(
        "Analysed {} readings in {:.6}s",
        metadata.readings_processed, metadata.analysis_time_seconds
    );

    Ok(AnalysisResult {
        statistics,
        anomalies,
        total_readings: readings.len(),
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
