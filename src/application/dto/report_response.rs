use crate::application::read_models::ReportReadModel;
use std::path::PathBuf;

/// A file persisted by the use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Human label shown in the console ("Controls CSV", "Diagram", ...)
    pub label: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// ReportResponse - Internal response DTO from the report generation use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub read_model: ReportReadModel,
    pub written_files: Vec<WrittenFile>,
    /// Non-fatal conditions encountered during the run, in order
    pub warnings: Vec<String>,
}

impl ReportResponse {
    pub fn new(
        read_model: ReportReadModel,
        written_files: Vec<WrittenFile>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            read_model,
            written_files,
            warnings,
        }
    }
}
