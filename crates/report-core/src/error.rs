use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the health report pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input file is missing, unreadable, or violates the reading schema.
    #[error("Invalid data file {path}: {reason}")]
    DataFormat { path: PathBuf, reason: String },

    /// A mean was requested over a dataset with no readings.
    #[error("Dataset contains no readings")]
    EmptyDataset,

    /// The report could not be written to its destination.
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReportError {
    /// Build a [`ReportError::DataFormat`] for `path`.
    pub fn data_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ReportError::DataFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_data_format() {
        let err = ReportError::data_format("/data/health.csv", "line 3: expected 8 fields, found 7");
        assert_eq!(
            err.to_string(),
            "Invalid data file /data/health.csv: line 3: expected 8 fields, found 7"
        );
    }

    #[test]
    fn test_error_display_empty_dataset() {
        assert_eq!(
            ReportError::EmptyDataset.to_string(),
            "Dataset contains no readings"
        );
    }

    #[test]
    fn test_error_display_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = ReportError::Write {
            path: PathBuf::from("missing/report.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write report"));
        assert!(msg.contains("missing/report.txt"));
        assert!(msg.contains("no such directory"));
    }

    #[test]
    fn test_error_write_exposes_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReportError::Write {
            path: PathBuf::from("report.txt"),
            source: io_err,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_display_config() {
        let err = ReportError::Config("output path has no file name".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: output path has no file name"
        );
    }
}
