use tracing::debug;

use crate::error::{ReportError, Result};
use crate::models::{AnomalyCounts, AnomalyThresholds, Reading, StatisticsSummary};

// ── StatisticsCalculator ──────────────────────────────────────────────────────

/// Stateless collection of mean calculations over a dataset.
pub struct StatisticsCalculator;

impl StatisticsCalculator {
    /// Arithmetic mean of heart rate, systolic blood pressure and glucose.
    ///
    /// Returns [`ReportError::EmptyDataset`] when `readings` is empty, since
    /// the mean is undefined there.
    pub fn compute_statistics(readings: &[Reading]) -> Result<StatisticsSummary> {
        if readings.is_empty() {
            return Err(ReportError::EmptyDataset);
        }

        // Integer sums keep the result independent of row order.
        let (heart_rate, systolic, glucose) =
            readings.iter().fold((0i64, 0i64, 0i64), |(hr, bp, gl), r| {
                (
                    hr + i64::from(r.heart_rate),
                    bp + i64::from(r.blood_pressure_systolic),
                    gl + i64::from(r.glucose_level),
                )
            });

        let count = readings.len() as f64;
        let summary = StatisticsSummary {
            avg_heart_rate: heart_rate as f64 / count,
            avg_systolic_bp: systolic as f64 / count,
            avg_glucose: glucose as f64 / count,
        };

        debug!(
            "Computed statistics over {} readings: {:?}",
            readings.len(),
            summary
        );

        Ok(summary)
    }
}

// ── AnomalyDetector ───────────────────────────────────────────────────────────

/// Counts readings that strictly exceed a set of thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnomalyDetector {
    thresholds: AnomalyThresholds,
}

impl AnomalyDetector {
    pub fn new(thresholds: AnomalyThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AnomalyThresholds {
        &self.thresholds
    }

    /// Count readings above each threshold. A value equal to its threshold
    /// is not abnormal.
    pub fn detect_anomalies(&self, readings: &[Reading]) -> AnomalyCounts {
        let t = &self.thresholds;
        let counts = readings.iter().fold(AnomalyCounts::default(), |mut acc, r| {
            if r.heart_rate > t.heart_rate {
                acc.high_heart_rate += 1;
            }
            if r.blood_pressure_systolic > t.systolic_bp {
                acc.high_blood_pressure += 1;
            }
            if r.glucose_level > t.glucose {
                acc.high_glucose += 1;
            }
            acc
        });

        debug!(
            "Detected anomalies over {} readings: {:?}",
            readings.len(),
            counts
        );

        counts
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(heart_rate: i32, systolic: i32, glucose: i32) -> Reading {
        Reading {
            patient_id: "P001".to_string(),
            timestamp: "2024-01-15 08:00:00".to_string(),
            heart_rate,
            blood_pressure_systolic: systolic,
            blood_pressure_diastolic: 80,
            temperature: 36.8,
            glucose_level: glucose,
            sensor_id: "S01".to_string(),
        }
    }

    // ── compute_statistics ────────────────────────────────────────────────────

    #[test]
    fn test_compute_statistics_empty_dataset_fails() {
        let err = StatisticsCalculator::compute_statistics(&[]).unwrap_err();
        assert!(matches!(err, ReportError::EmptyDataset));
    }

    #[test]
    fn test_compute_statistics_single_reading() {
        let stats = StatisticsCalculator::compute_statistics(&[reading(72, 118, 95)]).unwrap();
        assert_eq!(stats.avg_heart_rate, 72.0);
        assert_eq!(stats.avg_systolic_bp, 118.0);
        assert_eq!(stats.avg_glucose, 95.0);
    }

    #[test]
    fn test_compute_statistics_fractional_mean() {
        let readings = vec![reading(70, 120, 100), reading(75, 125, 105), reading(80, 131, 111)];
        let stats = StatisticsCalculator::compute_statistics(&readings).unwrap();
        assert!((stats.avg_heart_rate - 75.0).abs() < 1e-9);
        assert!((stats.avg_systolic_bp - 125.333_333).abs() < 1e-5);
        assert!((stats.avg_glucose - 105.333_333).abs() < 1e-5);
    }

    #[test]
    fn test_compute_statistics_two_identical_rows() {
        let readings = vec![reading(95, 140, 120), reading(95, 140, 120)];
        let stats = StatisticsCalculator::compute_statistics(&readings).unwrap();
        assert_eq!(stats.avg_heart_rate, 95.0);
        assert_eq!(stats.avg_systolic_bp, 140.0);
        assert_eq!(stats.avg_glucose, 120.0);
    }

    #[test]
    fn test_compute_statistics_order_independent() {
        let readings = vec![
            reading(61, 101, 87),
            reading(99, 145, 133),
            reading(77, 122, 104),
            reading(88, 131, 109),
        ];
        let mut reversed = readings.clone();
        reversed.reverse();
        let mut rotated = readings.clone();
        rotated.rotate_left(1);

        let base = StatisticsCalculator::compute_statistics(&readings).unwrap();
        assert_eq!(base, StatisticsCalculator::compute_statistics(&reversed).unwrap());
        assert_eq!(base, StatisticsCalculator::compute_statistics(&rotated).unwrap());
    }

    // ── detect_anomalies ──────────────────────────────────────────────────────

    #[test]
    fn test_detect_anomalies_empty_dataset() {
        let counts = AnomalyDetector::default().detect_anomalies(&[]);
        assert_eq!(counts, AnomalyCounts::default());
    }

    #[test]
    fn test_detect_anomalies_threshold_is_exclusive() {
        let detector = AnomalyDetector::default();

        let at = detector.detect_anomalies(&[reading(90, 130, 110)]);
        assert_eq!(at, AnomalyCounts::default());

        let above = detector.detect_anomalies(&[reading(91, 131, 111)]);
        assert_eq!(above.high_heart_rate, 1);
        assert_eq!(above.high_blood_pressure, 1);
        assert_eq!(above.high_glucose, 1);
    }

    #[test]
    fn test_detect_anomalies_categories_overlap() {
        let readings = vec![
            reading(95, 140, 120), // all three
            reading(95, 120, 100), // heart rate only
            reading(70, 135, 115), // blood pressure and glucose
            reading(70, 120, 100), // none
        ];
        let counts = AnomalyDetector::default().detect_anomalies(&readings);
        assert_eq!(counts.high_heart_rate, 2);
        assert_eq!(counts.high_blood_pressure, 2);
        assert_eq!(counts.high_glucose, 2);
    }

    #[test]
    fn test_detect_anomalies_counts_bounded_by_total() {
        let readings: Vec<Reading> = (0..25)
            .map(|i| reading(60 + i * 2, 110 + i * 2, 90 + i * 2))
            .collect();
        let counts = AnomalyDetector::default().detect_anomalies(&readings);
        for count in [
            counts.high_heart_rate,
            counts.high_blood_pressure,
            counts.high_glucose,
        ] {
            assert!(count <= readings.len());
        }
    }

    #[test]
    fn test_detect_anomalies_custom_thresholds() {
        let detector = AnomalyDetector::new(AnomalyThresholds {
            heart_rate: 100,
            systolic_bp: 150,
            glucose: 130,
        });
        let counts = detector.detect_anomalies(&[reading(95, 140, 120), reading(101, 151, 131)]);
        assert_eq!(counts.high_heart_rate, 1);
        assert_eq!(counts.high_blood_pressure, 1);
        assert_eq!(counts.high_glucose, 1);
        assert_eq!(detector.thresholds().heart_rate, 100);
    }
}
