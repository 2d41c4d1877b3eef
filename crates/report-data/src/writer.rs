//! Report persistence.

use std::path::Path;

use report_core::error::{ReportError, Result};
use tracing::debug;

/// Write `text` verbatim to `path`, creating or truncating the file.
///
/// The parent directory must already exist; it is never created here.
pub fn save_report(text: &str, path: &Path) -> Result<()> {
    std::fs::write(path, text).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
