use crate::report_generation::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service for stamping a report run
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh v4 document UUID
    pub fn generate_metadata() -> ReportMetadata {
        ReportMetadata::new(Utc::now().to_rfc3339(), Uuid::new_v4().to_string())
    }
}
