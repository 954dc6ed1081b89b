use crate::report_generation::domain::{
    AssessmentResponse, ComplianceAssessmentView, ControlRecord, ControlRow, ControlStatus,
    FindingRow, FrameworkKey, SummaryRow, LIST_DELIMITER,
};

/// The one framework an SSP document is written for
#[derive(Debug, Clone)]
pub struct SelectedFramework {
    /// `None` when the response carried no recognized framework key
    pub key: Option<FrameworkKey>,
    pub name: String,
    pub view: ComplianceAssessmentView,
}

/// AssessmentReshaper service flattening a multi-framework assessment
/// into tabular projections.
///
/// All projections walk `FrameworkKey::ALL` in order, skip frameworks the
/// response does not contain, and keep each framework's control order.
pub struct AssessmentReshaper;

impl AssessmentReshaper {
    pub fn controls_table(response: &AssessmentResponse) -> Vec<ControlRow> {
        let mut rows = Vec::new();
        for (key, view) in response.present_frameworks() {
            let framework = key.display_name();
            for control in &view.controls {
                rows.push(ControlRow {
                    framework: framework.clone(),
                    version: view.version().to_string(),
                    control_id: control.control_id().to_string(),
                    title: control.title().to_string(),
                    status: control.status.to_string(),
                    findings_count: control.findings.len(),
                    evidence_count: control.evidence.len(),
                    findings: control.findings.join(LIST_DELIMITER),
                    evidence: control.evidence.join(LIST_DELIMITER),
                });
            }
        }
        rows
    }

    pub fn findings_table(response: &AssessmentResponse) -> Vec<FindingRow> {
        let mut rows = Vec::new();
        for (key, view) in response.present_frameworks() {
            let framework = key.display_name();
            for control in &view.controls {
                let row = |finding: &str, severity: &str| FindingRow {
                    framework: framework.clone(),
                    version: view.version().to_string(),
                    control_id: control.control_id().to_string(),
                    control_title: control.title().to_string(),
                    status: control.status.to_string(),
                    finding: finding.to_string(),
                    severity: severity.to_string(),
                };

                if control.findings.is_empty() {
                    rows.push(row(Self::placeholder_finding(control.status), "Info"));
                } else {
                    let severity = Self::severity(control.status);
                    rows.extend(control.findings.iter().map(|f| row(f.as_str(), severity)));
                }
            }
        }
        rows
    }

    pub fn summary_table(response: &AssessmentResponse, total_assets: usize) -> Vec<SummaryRow> {
        response
            .present_frameworks()
            .into_iter()
            .map(|(key, view)| {
                let summary = view.summary;
                SummaryRow {
                    assessment_id: response.id_or_na().to_string(),
                    framework: key.display_name(),
                    version: view.version().to_string(),
                    timestamp: view
                        .timestamp
                        .clone()
                        .or_else(|| response.created_at.clone())
                        .unwrap_or_else(|| "N/A".to_string()),
                    total_controls: summary.total_controls,
                    satisfied: summary.satisfied,
                    not_satisfied: summary.not_satisfied,
                    not_applicable: summary.not_applicable,
                    compliance_percentage: format!("{:.2}%", summary.compliance_percentage()),
                    total_assets,
                }
            })
            .collect()
    }

    /// Picks the first recognized framework present in the response.
    ///
    /// Without any recognized key the whole `assessment` object is read as a
    /// single view. No current service response is known to take that shape.
    pub fn select_framework(response: &AssessmentResponse) -> SelectedFramework {
        for key in FrameworkKey::ALL {
            if let Some(value) = response.assessment.get(key.as_key()) {
                return SelectedFramework {
                    key: Some(key),
                    name: key.display_name(),
                    view: ComplianceAssessmentView::from_value(value),
                };
            }
        }

        let fallback = serde_json::Value::Object(response.assessment.clone());
        SelectedFramework {
            key: None,
            name: "Unknown".to_string(),
            view: ComplianceAssessmentView::from_value(&fallback),
        }
    }

    /// Controls with status `not-satisfied`, in assessment order
    pub fn controls_needing_attention(view: &ComplianceAssessmentView) -> Vec<&ControlRecord> {
        view.controls
            .iter()
            .filter(|c| c.status == ControlStatus::NotSatisfied)
            .collect()
    }

    fn severity(status: ControlStatus) -> &'static str {
        match status {
            ControlStatus::NotSatisfied => "High",
            _ => "Info",
        }
    }

    fn placeholder_finding(status: ControlStatus) -> &'static str {
        match status {
            ControlStatus::Satisfied => "No findings",
            _ => "N/A",
        }
    }
}
