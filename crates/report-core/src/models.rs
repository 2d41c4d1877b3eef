use serde::{Deserialize, Serialize};

/// Number of comma-separated fields in one reading row.
pub const READING_FIELD_COUNT: usize = 8;

/// One timestamped sensor observation for one patient.
///
/// Field order matches the column order of the input file; rows are
/// deserialized positionally, so reordering these fields changes the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Short patient identifier.
    pub patient_id: String,
    /// Capture time, kept as opaque text.
    pub timestamp: String,
    /// Beats per minute.
    pub heart_rate: i32,
    /// Systolic blood pressure in mmHg.
    pub blood_pressure_systolic: i32,
    /// Diastolic blood pressure in mmHg.
    pub blood_pressure_diastolic: i32,
    /// Body temperature, passed through unchanged.
    pub temperature: f32,
    /// Glucose level in mg/dL.
    pub glucose_level: i32,
    /// Identifier of the sensor that produced the reading.
    pub sensor_id: String,
}

/// Mean values over a dataset. Rounding happens only when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub avg_heart_rate: f64,
    pub avg_systolic_bp: f64,
    pub avg_glucose: f64,
}

/// Number of readings strictly above each threshold.
///
/// Categories are independent: one reading may count toward several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyCounts {
    pub high_heart_rate: usize,
    pub high_blood_pressure: usize,
    pub high_glucose: usize,
}

/// Heart rate (bpm) above which a reading is abnormal.
pub const HEART_RATE_THRESHOLD: i32 = 90;
/// Systolic blood pressure (mmHg) above which a reading is abnormal.
pub const SYSTOLIC_BP_THRESHOLD: i32 = 130;
/// Glucose level (mg/dL) above which a reading is abnormal.
pub const GLUCOSE_THRESHOLD: i32 = 110;

/// Upper bounds used by [`crate::calculations::AnomalyDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyThresholds {
    pub heart_rate: i32,
    pub systolic_bp: i32,
    pub glucose: i32,
}

impl Default for AnomalyThresholds {
    fn default() -> Self {
        Self {
            heart_rate: HEART_RATE_THRESHOLD,
            systolic_bp: SYSTOLIC_BP_THRESHOLD,
            glucose: GLUCOSE_THRESHOLD,
        }
    }
}
