use std::sync::{Arc, Mutex};
use tfstate_ssp::prelude::*;
use tfstate_ssp::shared::error::ReportError;

/// Mock AssessmentService answering with a canned JSON response
#[derive(Clone)]
pub struct MockAssessmentService {
    pub response: serde_json::Value,
    pub should_fail: bool,
    pub requests: Arc<Mutex<Vec<AssessmentRequest>>>,
}

impl MockAssessmentService {
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            response,
            should_fail: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new(serde_json::Value::Null)
        }
    }

    pub fn get_requests(&self) -> Vec<AssessmentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl AssessmentService for MockAssessmentService {
    fn analyze(&self, request: &AssessmentRequest) -> Result<AssessmentResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if self.should_fail {
            return Err(ReportError::ServiceError {
                status: 500,
                body: "internal error".to_string(),
            }
            .into());
        }
        AssessmentResponse::from_value(self.response.clone())
    }
}
