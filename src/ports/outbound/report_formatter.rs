use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// A formatted document ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub filename: String,
    /// Human label for console output
    pub label: String,
    pub content: String,
}

/// Output of one formatter run
#[derive(Debug, Clone, Default)]
pub struct FormattedReport {
    pub files: Vec<RenderedFile>,
    /// Notices for sections that were skipped (for example, empty tables)
    pub warnings: Vec<String>,
}

/// ReportFormatter port for rendering the report read model
///
/// This port abstracts the formatting logic for the tabular (CSV) and
/// nested-document (JSON/YAML) output modes.
pub trait ReportFormatter {
    /// Formats the read model into one or more files
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<FormattedReport>;
}
