use std::path::PathBuf;
use thiserror::Error;

use crate::models::ReportFormat;

/// Failures raised by the report pipeline. Data-source errors are not part of
/// this taxonomy; they propagate unchanged out of the store layer.
#[derive(Debug, Error)]
pub(crate) enum ReportError {
    #[error("unsupported report format: {0}")]
    UnsupportedFormat(ReportFormat),

    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV report: {0}")]
    Csv(#[from] csv::Error),
}
