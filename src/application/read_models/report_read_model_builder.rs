//! Builder for constructing ReportReadModel from domain objects

use super::report_read_model::{ReportMetadataView, ReportReadModel};
use crate::report_generation::domain::{AssessmentResponse, NormalizedAsset, ReportMetadata};
use crate::report_generation::services::AssessmentReshaper;

/// Builder for constructing ReportReadModel from domain objects
///
/// Runs every reshaping projection once so formatters only read.
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    pub fn build(
        response: AssessmentResponse,
        assets: Vec<NormalizedAsset>,
        metadata: &ReportMetadata,
    ) -> ReportReadModel {
        let controls = AssessmentReshaper::controls_table(&response);
        let findings = AssessmentReshaper::findings_table(&response);
        let summary = AssessmentReshaper::summary_table(&response, assets.len());
        let selected = AssessmentReshaper::select_framework(&response);

        ReportReadModel {
            metadata: Self::build_metadata(metadata),
            response,
            assets,
            controls,
            findings,
            summary,
            selected,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            generated_at: metadata.generated_at().to_string(),
            document_uuid: metadata.document_uuid().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_generation::domain::AssetFields;
    use serde_json::json;

    fn create_test_metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2025-01-15T10:30:00+00:00".to_string(),
            "12345678-1234-4234-8234-123456789012".to_string(),
        )
    }

    #[test]
    fn test_build_runs_all_projections() {
        let response = AssessmentResponse::from_value(json!({
            "id": "asm-1",
            "assessment": {"nist_800_53": {
                "summary": {"total_controls": 2, "satisfied": 1, "not_satisfied": 1},
                "controls": [
                    {"control_id": "AC-1", "status": "satisfied"},
                    {"control_id": "AC-2", "status": "not-satisfied", "findings": ["a", "b"]}
                ]
            }}
        }))
        .unwrap();
        let assets = vec![
            NormalizedAsset::new("aws_vpc", "main", "aws", 0, AssetFields::new()),
            NormalizedAsset::new("aws_vpc", "edge", "aws", 0, AssetFields::new()),
        ];

        let model = ReportReadModelBuilder::build(response, assets, &create_test_metadata());

        assert_eq!(model.total_assets(), 2);
        assert_eq!(model.controls.len(), 2);
        assert_eq!(model.findings.len(), 3);
        assert_eq!(model.summary.len(), 1);
        assert_eq!(model.summary[0].total_assets, 2);
        assert_eq!(model.selected.name, "NIST 800 53");
        assert_eq!(model.metadata.generated_at, "2025-01-15T10:30:00+00:00");
        assert_eq!(model.response.id_or_na(), "asm-1");
    }

    #[test]
    fn test_build_with_empty_response() {
        let response = AssessmentResponse::from_value(json!({})).unwrap();
        let model = ReportReadModelBuilder::build(response, Vec::new(), &create_test_metadata());

        assert!(model.controls.is_empty());
        assert!(model.findings.is_empty());
        assert!(model.summary.is_empty());
        assert_eq!(model.selected.name, "Unknown");
    }
}
