use crate::application::dto::{ReportRequest, ReportResponse};
use crate::shared::Result;

/// ReportGenerationPort - Inbound port for the report generation use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger a report run.
pub trait ReportGenerationPort {
    /// Runs one report: read the state, fetch the assessment, format and persist
    ///
    /// # Errors
    /// Returns an error if:
    /// - The state file cannot be read
    /// - The assessment service fails or answers with a non-success status
    /// - A formatted document cannot be written
    fn generate_report(&self, request: ReportRequest) -> Result<ReportResponse>;
}
