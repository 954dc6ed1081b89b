use super::OutputFormat;
use std::path::PathBuf;

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the base64-encoded Terraform state file
    pub state_path: PathBuf,
    /// Display name of the assessment sent to the service
    pub name: String,
    pub format: OutputFormat,
    /// Ask the service for an architecture diagram.
    /// Ignored for CSV output, which never persists artifacts.
    pub include_diagram: bool,
}

impl ReportRequest {
    pub fn new(state_path: PathBuf, name: String, format: OutputFormat, include_diagram: bool) -> Self {
        Self {
            state_path,
            name,
            format,
            include_diagram,
        }
    }

    /// Diagram flag actually sent to the service
    pub fn effective_include_diagram(&self) -> bool {
        self.include_diagram && !self.format.is_tabular()
    }
}
