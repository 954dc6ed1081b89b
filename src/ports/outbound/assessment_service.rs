use crate::report_generation::domain::AssessmentResponse;
use crate::shared::Result;
use serde::Serialize;

/// Body of an assessment request, as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentRequest {
    pub name: String,
    /// `json`, `yaml` or `oscal`
    pub format: String,
    pub content_base64: String,
    pub include_diagram: bool,
}

/// AssessmentService port for obtaining a compliance assessment
///
/// This port abstracts the external evidence service that evaluates a
/// Terraform state against the supported compliance frameworks.
pub trait AssessmentService {
    /// Submits the state for assessment and returns the parsed response
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The service answers with a non-success status (status and body are kept verbatim)
    /// - The response body is not a JSON object
    fn analyze(&self, request: &AssessmentRequest) -> Result<AssessmentResponse>;
}
