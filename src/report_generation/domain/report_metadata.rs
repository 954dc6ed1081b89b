/// ReportMetadata value object stamped onto every generated document
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: String,
    document_uuid: String,
}

impl ReportMetadata {
    pub fn new(generated_at: String, document_uuid: String) -> Self {
        Self {
            generated_at,
            document_uuid,
        }
    }

    /// RFC 3339 timestamp of this run
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn document_uuid(&self) -> &str {
        &self.document_uuid
    }
}
