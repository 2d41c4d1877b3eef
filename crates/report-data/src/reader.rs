//! CSV loading for health sensor readings.
//!
//! The first line is a header and is only checked for its field count; rows
//! are mapped onto [`Reading`] by position. Any structurally invalid row
//! aborts the whole load.

use std::io::Read;
use std::path::Path;

use report_core::error::{ReportError, Result};
use report_core::models::{Reading, READING_FIELD_COUNT};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every reading from the CSV file at `path`.
///
/// Fails with [`ReportError::DataFormat`] when the file cannot be opened, the
/// header does not have eight fields, or any row has the wrong field count or
/// a value that does not parse as its declared type.
pub fn load_readings(path: &Path) -> Result<Vec<Reading>> {
    let file = std::fs::File::open(path)
        .map_err(|e| ReportError::data_format(path, format!("cannot open file: {e}")))?;

    let readings = read_readings(file, path)?;

    debug!("Loaded {} readings from {}", readings.len(), path.display());
    Ok(readings)
}

/// Parse readings from any byte source. `origin` only labels errors.
pub fn read_readings<R: Read>(source: R, origin: &Path) -> Result<Vec<Reading>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let header_len = reader
        .headers()
        .map_err(|e| csv_error(origin, &e))?
        .len();
    if header_len != READING_FIELD_COUNT {
        return Err(ReportError::data_format(
            origin,
            format!("header has {header_len} fields, expected {READING_FIELD_COUNT}"),
        ));
    }

    let mut readings = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(origin, &e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != READING_FIELD_COUNT {
            return Err(ReportError::data_format(
                origin,
                format!(
                    "line {line}: expected {READING_FIELD_COUNT} fields, found {}",
                    record.len()
                ),
            ));
        }

        let reading: Reading = record
            .deserialize(None)
            .map_err(|e| ReportError::data_format(origin, format!("line {line}: {e}")))?;
        readings.push(reading);
    }

    Ok(readings)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert a reader-level CSV error, keeping the line number when known.
fn csv_error(origin: &Path, err: &csv::Error) -> ReportError {
    match err.position() {
        Some(pos) => ReportError::data_format(origin, format!("line {}: {err}", pos.line())),
        None => ReportError::data_format(origin, err.to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
