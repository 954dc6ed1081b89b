use crate::ports::outbound::{AssessmentRequest, AssessmentService};
use crate::report_generation::domain::AssessmentResponse;
use crate::shared::error::ReportError;
use crate::shared::Result;
use anyhow::Context;
use std::time::Duration;

/// Default base URL of the evidence service
pub const DEFAULT_API_URL: &str = "https://api.joindelta.com";

const TERRAFORM_EVIDENCE_PATH: &str = "/v1/evidence/terraform";
const CUSTOMER_KEY_HEADER: &str = "X-Customer-Key";

/// EvidenceApiClient adapter for the Terraform evidence endpoint
///
/// This adapter implements the AssessmentService port with a blocking
/// reqwest client. Assessments of large states can take minutes, so the
/// request timeout is generous.
pub struct EvidenceApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    customer_key: String,
}

impl EvidenceApiClient {
    pub fn new(base_url: &str, customer_key: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("tfstate-ssp/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(300))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            customer_key,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TERRAFORM_EVIDENCE_PATH)
    }
}

impl AssessmentService for EvidenceApiClient {
    fn analyze(&self, request: &AssessmentRequest) -> Result<AssessmentResponse> {
        let url = self.endpoint();
        let response = self
            .client
            .post(&url)
            .header(CUSTOMER_KEY_HEADER, &self.customer_key)
            .json(request)
            .send()
            .with_context(|| format!("Failed to reach assessment service at {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReportError::ServiceError {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let value: serde_json::Value = response
            .json()
            .context("Assessment service returned a body that is not valid JSON")?;
        AssessmentResponse::from_value(value)
    }
}
