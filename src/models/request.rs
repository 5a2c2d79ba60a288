use chrono::NaiveDate;
use std::path::PathBuf;

/// Target format for a rendered report. `Excel` and `Pdf` are accepted by the
/// request surface but have no renderer; asking for them fails with
/// `ReportError::UnsupportedFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Csv,
    Excel,
    Pdf,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Csv => "CSV",
            Self::Excel => "Excel",
            Self::Pdf => "PDF",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters for one report generation run. Built once per invocation and
/// never persisted.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub category: Option<String>,
    pub output_path: PathBuf,
    pub format: ReportFormat,
}

impl ReportRequest {
    /// An empty `category` selects all categories. A non-empty category is
    /// matched exactly, case-sensitive.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        category: &str,
        output_path: impl Into<PathBuf>,
        format: ReportFormat,
    ) -> Self {
        let category = if category.is_empty() {
            None
        } else {
            Some(category.to_string())
        };
        Self {
            start,
            end,
            category,
            output_path: output_path.into(),
            format,
        }
    }

    /// Category label as it appears in the text report header: the raw filter
    /// string, empty when no filter was given.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }
}
