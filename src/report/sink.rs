use std::fs;
use std::path::Path;

use crate::error::ReportError;

/// Write the rendered report, replacing any existing file at `path` in full.
/// Any underlying write failure is fatal to the run; nothing is retried.
pub(crate) fn write_report(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
