use std::fmt::Write as _;

use crate::models::{AnomalyCounts, StatisticsSummary};

/// Title line of the analysis report.
pub const REPORT_TITLE: &str = "Health Sensor Data Analysis Report";
/// Rule printed under the title.
pub const REPORT_RULE: &str = "_____________________________________";

/// Format a floating-point number with a fixed number of decimal places and
/// no grouping separators.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(95.0, 1), "95.0");
/// assert_eq!(format_decimal(1234.56, 1), "1234.6");
/// assert_eq!(format_decimal(7.0, 0), "7");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Render the analysis report.
///
/// Averages are shown with one decimal, counts as plain integers. The output
/// depends only on the arguments, so repeated calls are byte-identical.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_report;
/// use report_core::models::{AnomalyCounts, StatisticsSummary};
///
/// let stats = StatisticsSummary { avg_heart_rate: 72.0, avg_systolic_bp: 120.0, avg_glucose: 98.0 };
/// let report = format_report(&stats, &AnomalyCounts::default(), 3);
/// assert!(report.starts_with("Health Sensor Data Analysis Report\n"));
/// assert!(report.contains("- Total readings: 3\n"));
/// ```
pub fn format_report(
    stats: &StatisticsSummary,
    anomalies: &AnomalyCounts,
    total_count: usize,
) -> String {
    let mut out = String::with_capacity(384);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "{REPORT_RULE}");

    let _ = writeln!(out, "Dataset Summary:");
    let _ = writeln!(out, "- Total readings: {total_count}");

    let _ = writeln!(out, "Average Measurements:");
    let _ = writeln!(
        out,
        "- Systolic Blood Pressure: {}",
        format_decimal(stats.avg_systolic_bp, 1)
    );
    let _ = writeln!(out, "- Heart Rate: {}", format_decimal(stats.avg_heart_rate, 1));
    let _ = writeln!(out, "- Glucose Level: {}", format_decimal(stats.avg_glucose, 1));

    let _ = writeln!(out, "Abnormal Readings:");
    let _ = writeln!(out, "- Heart Rate > 90 : {}", anomalies.high_heart_rate);
    let _ = writeln!(out, "- Systolic BP > 130 : {}", anomalies.high_blood_pressure);
    let _ = writeln!(out, "- Glucose > 110 : {}", anomalies.high_glucose);

    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────
