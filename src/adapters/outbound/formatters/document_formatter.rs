use crate::application::read_models::{document_projection, ReportReadModel};
use crate::ports::outbound::{FormattedReport, RenderedFile, ReportFormatter};
use crate::report_generation::domain::{ControlRecord, ControlStatus};
use crate::shared::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const SSP_STEM: &str = "fedramp-ssp";
pub const ASSET_INVENTORY_STEM: &str = "asset-inventory";
pub const RAW_ASSESSMENT_FILE: &str = "raw-assessment.json";

const OSCAL_VERSION: &str = "1.0.0";
const DOCUMENT_VERSION: &str = "1.0";
const AUTHORIZATION_BOUNDARY: &str = "Cloud infrastructure defined by Terraform state";

/// Serialization used for the SSP and inventory documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEncoding {
    Json,
    Yaml,
}

impl DocumentEncoding {
    fn extension(&self) -> &'static str {
        match self {
            DocumentEncoding::Json => "json",
            DocumentEncoding::Yaml => "yaml",
        }
    }

    fn encode<T: Serialize>(&self, document: &T) -> Result<String> {
        Ok(match self {
            DocumentEncoding::Json => serde_json::to_string_pretty(document)?,
            DocumentEncoding::Yaml => serde_yaml_ng::to_string(document)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct SspDocument {
    system_security_plan: SystemSecurityPlan,
}

#[derive(Debug, Serialize)]
struct SystemSecurityPlan {
    metadata: SspMetadata,
    system_information: SystemInformation,
    compliance_framework: ComplianceFramework,
    asset_inventory: AssetInventory,
    control_implementation: Vec<ControlImplementation>,
    compliance_summary: ComplianceSummary,
}

#[derive(Debug, Serialize)]
struct SspMetadata {
    title: String,
    version: String,
    oscal_version: String,
    last_modified: String,
    published: String,
    assessment_id: String,
    document_uuid: String,
}

#[derive(Debug, Serialize)]
struct SystemInformation {
    system_name: String,
    system_id: String,
    description: String,
    authorization_boundary: String,
}

#[derive(Debug, Serialize)]
struct ComplianceFramework {
    framework: String,
    version: String,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct AssetInventory {
    total_assets: usize,
    assets: Vec<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
struct ControlImplementation {
    control_id: String,
    control_title: String,
    implementation_status: ControlStatus,
    findings: Vec<String>,
    evidence: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ComplianceSummary {
    total_controls: u64,
    satisfied: u64,
    not_satisfied: u64,
    not_applicable: u64,
    compliance_percentage: f64,
}

#[derive(Debug, Serialize)]
struct InventoryDocument {
    asset_inventory: StandaloneInventory,
}

#[derive(Debug, Serialize)]
struct StandaloneInventory {
    metadata: InventoryMetadata,
    summary: InventorySummary,
    assets: Vec<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
struct InventoryMetadata {
    title: String,
    version: String,
    generated: String,
}

#[derive(Debug, Serialize)]
struct InventorySummary {
    total_assets: usize,
    by_cloud_provider: BTreeMap<String, usize>,
    by_asset_type: BTreeMap<String, usize>,
}

/// DocumentFormatter adapter for the nested-document report mode
///
/// This adapter implements the ReportFormatter port. It renders the SSP
/// document for the selected framework, the standalone asset inventory and
/// the raw service response.
pub struct DocumentFormatter {
    encoding: DocumentEncoding,
}

impl DocumentFormatter {
    pub fn new(encoding: DocumentEncoding) -> Self {
        Self { encoding }
    }

    fn build_ssp(&self, model: &ReportReadModel, assets: Vec<Map<String, Value>>) -> SspDocument {
        let response = &model.response;
        let selected = &model.selected;
        let view = &selected.view;
        let generated_at = &model.metadata.generated_at;

        let version = view
            .version
            .clone()
            .or_else(|| {
                response
                    .assessment
                    .get("version")
                    .and_then(Value::as_str)
                    .map(String::from)
            })
            .unwrap_or_else(|| "Unknown".to_string());
        let summary = view.summary;

        SspDocument {
            system_security_plan: SystemSecurityPlan {
                metadata: SspMetadata {
                    title: "FedRAMP System Security Plan".to_string(),
                    version: DOCUMENT_VERSION.to_string(),
                    oscal_version: OSCAL_VERSION.to_string(),
                    last_modified: generated_at.clone(),
                    published: response
                        .created_at
                        .clone()
                        .unwrap_or_else(|| generated_at.clone()),
                    assessment_id: response.id_or_na().to_string(),
                    document_uuid: model.metadata.document_uuid.clone(),
                },
                system_information: SystemInformation {
                    system_name: view
                        .id
                        .clone()
                        .unwrap_or_else(|| response.id_or_na().to_string()),
                    system_id: response.id_or_na().to_string(),
                    description: format!(
                        "Compliance assessment against {} {}",
                        selected.name, version
                    ),
                    authorization_boundary: AUTHORIZATION_BOUNDARY.to_string(),
                },
                compliance_framework: ComplianceFramework {
                    framework: selected.name.clone(),
                    version,
                    timestamp: view
                        .timestamp
                        .clone()
                        .or_else(|| response.created_at.clone())
                        .unwrap_or_else(|| generated_at.clone()),
                },
                asset_inventory: AssetInventory {
                    total_assets: assets.len(),
                    assets,
                },
                control_implementation: view.controls.iter().map(Self::implementation).collect(),
                compliance_summary: ComplianceSummary {
                    total_controls: summary.total_controls,
                    satisfied: summary.satisfied,
                    not_satisfied: summary.not_satisfied,
                    not_applicable: summary.not_applicable,
                    compliance_percentage: round2(summary.compliance_percentage()),
                },
            },
        }
    }

    fn implementation(control: &ControlRecord) -> ControlImplementation {
        ControlImplementation {
            control_id: control.control_id().to_string(),
            control_title: control.title().to_string(),
            implementation_status: control.status,
            findings: control.findings.clone(),
            evidence: control.evidence.clone(),
        }
    }

    fn build_inventory(
        &self,
        model: &ReportReadModel,
        assets: Vec<Map<String, Value>>,
    ) -> InventoryDocument {
        InventoryDocument {
            asset_inventory: StandaloneInventory {
                metadata: InventoryMetadata {
                    title: "FedRAMP Asset Inventory".to_string(),
                    version: DOCUMENT_VERSION.to_string(),
                    generated: model.metadata.generated_at.clone(),
                },
                summary: InventorySummary {
                    total_assets: assets.len(),
                    by_cloud_provider: model.count_assets_by("cloud_provider"),
                    by_asset_type: model.count_assets_by("asset_type"),
                },
                assets,
            },
        }
    }
}

impl ReportFormatter for DocumentFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<FormattedReport> {
        let mut report = FormattedReport::default();
        let assets: Vec<Map<String, Value>> = model.assets.iter().map(document_projection).collect();

        if assets.is_empty() {
            report
                .warnings
                .push("No assets found in Terraform state; asset inventory is empty".to_string());
        }
        if model.selected.view.controls.is_empty() {
            report.warnings.push(format!(
                "No controls found for {}; control implementation is empty",
                model.selected.name
            ));
        }

        let ext = self.encoding.extension();
        let ssp = self.build_ssp(model, assets.clone());
        report.files.push(RenderedFile {
            filename: format!("{}.{}", SSP_STEM, ext),
            label: "SSP Document".to_string(),
            content: self.encoding.encode(&ssp)?,
        });

        let inventory = self.build_inventory(model, assets);
        report.files.push(RenderedFile {
            filename: format!("{}.{}", ASSET_INVENTORY_STEM, ext),
            label: "Asset Inventory".to_string(),
            content: self.encoding.encode(&inventory)?,
        });

        report.files.push(RenderedFile {
            filename: RAW_ASSESSMENT_FILE.to_string(),
            label: "Raw Assessment".to_string(),
            content: serde_json::to_string_pretty(model.response.raw())?,
        });

        Ok(report)
    }
}

/// Two-decimal value matching the `{:.2}` text of the summary table
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ReportReadModelBuilder;
    use crate::report_generation::domain::{
        AssessmentResponse, AssetField, AssetFields, NormalizedAsset, ReportMetadata,
    };
    use serde_json::json;

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2025-02-01T08:00:00+00:00".to_string(),
            "0b5e3f4a-7c1d-4e2f-9a8b-112233445566".to_string(),
        )
    }

    fn response() -> AssessmentResponse {
        AssessmentResponse::from_value(json!({
            "id": "asm-7",
            "status": "completed",
            "created_at": "2025-02-01T07:59:00Z",
            "assessment": {
                "nist_800_171": {"version": "r2", "controls": []},
                "nist_800_53": {
                    "version": "rev5",
                    "summary": {"total_controls": 3, "satisfied": 2, "not_satisfied": 1},
                    "controls": [
                        {"control_id": "SC-28", "title": "Protection at Rest",
                         "status": "not-satisfied", "findings": ["bucket unencrypted"]}
                    ]
                }
            },
            "artifacts": []
        }))
        .unwrap()
    }

    fn assets() -> Vec<NormalizedAsset> {
        let mut s3 = AssetFields::new();
        s3.insert("cloud_provider".into(), AssetField::text("AWS"));
        s3.insert("asset_type".into(), AssetField::text("S3 Bucket"));
        s3.insert("versioning".into(), AssetField::Flag(true));
        s3.insert(
            "encryption".into(),
            AssetField::Encryption(json!({"rule": []}).as_object().cloned()),
        );
        s3.insert("tags".into(), AssetField::Structured(json!({"team": "sec"})));

        let mut random = AssetFields::new();
        random.insert("asset_type".into(), AssetField::text("random_id"));

        vec![
            NormalizedAsset::new("aws_s3_bucket", "logs", "aws", 0, s3),
            NormalizedAsset::new("random_id", "suffix", "random", 0, random),
        ]
    }

    fn parse(report: &FormattedReport, name: &str) -> Value {
        let file = report.files.iter().find(|f| f.filename == name).unwrap();
        serde_json::from_str(&file.content).unwrap()
    }

    #[test]
    fn test_json_files() {
        let model = ReportReadModelBuilder::build(response(), assets(), &metadata());
        let report = DocumentFormatter::new(DocumentEncoding::Json).format(&model).unwrap();

        let names: Vec<&str> = report.files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["fedramp-ssp.json", "asset-inventory.json", "raw-assessment.json"]
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_ssp_structure() {
        let model = ReportReadModelBuilder::build(response(), assets(), &metadata());
        let report = DocumentFormatter::new(DocumentEncoding::Json).format(&model).unwrap();
        let ssp = parse(&report, "fedramp-ssp.json");
        let plan = &ssp["system_security_plan"];

        assert_eq!(plan["metadata"]["oscal_version"], json!("1.0.0"));
        assert_eq!(plan["metadata"]["assessment_id"], json!("asm-7"));
        assert_eq!(plan["metadata"]["published"], json!("2025-02-01T07:59:00Z"));
        assert_eq!(
            plan["metadata"]["document_uuid"],
            json!("0b5e3f4a-7c1d-4e2f-9a8b-112233445566")
        );
        assert_eq!(plan["system_information"]["system_name"], json!("asm-7"));
        assert_eq!(
            plan["system_information"]["description"],
            json!("Compliance assessment against NIST 800 53 rev5")
        );
        assert_eq!(plan["compliance_framework"]["framework"], json!("NIST 800 53"));
        assert_eq!(
            plan["compliance_framework"]["timestamp"],
            json!("2025-02-01T07:59:00Z")
        );
        assert_eq!(plan["asset_inventory"]["total_assets"], json!(2));
        assert_eq!(
            plan["control_implementation"][0]["implementation_status"],
            json!("not-satisfied")
        );
        assert_eq!(
            plan["control_implementation"][0]["control_title"],
            json!("Protection at Rest")
        );
        assert_eq!(plan["compliance_summary"]["compliance_percentage"], json!(66.67));
    }

    #[test]
    fn test_assets_keep_structure_in_documents() {
        let model = ReportReadModelBuilder::build(response(), assets(), &metadata());
        let report = DocumentFormatter::new(DocumentEncoding::Json).format(&model).unwrap();
        let ssp = parse(&report, "fedramp-ssp.json");
        let bucket = &ssp["system_security_plan"]["asset_inventory"]["assets"][0];

        assert_eq!(bucket["versioning"], json!(true));
        assert_eq!(bucket["encryption"], json!({"rule": []}));
        assert_eq!(bucket["tags"], json!({"team": "sec"}));
    }

    #[test]
    fn test_inventory_groups_with_unknown() {
        let model = ReportReadModelBuilder::build(response(), assets(), &metadata());
        let report = DocumentFormatter::new(DocumentEncoding::Json).format(&model).unwrap();
        let inventory = parse(&report, "asset-inventory.json");
        let summary = &inventory["asset_inventory"]["summary"];

        assert_eq!(summary["total_assets"], json!(2));
        assert_eq!(summary["by_cloud_provider"], json!({"AWS": 1, "Unknown": 1}));
        assert_eq!(
            summary["by_asset_type"],
            json!({"S3 Bucket": 1, "random_id": 1})
        );
        assert_eq!(
            inventory["asset_inventory"]["metadata"]["generated"],
            json!("2025-02-01T08:00:00+00:00")
        );
    }

    #[test]
    fn test_raw_assessment_is_verbatim() {
        let model = ReportReadModelBuilder::build(response(), Vec::new(), &metadata());
        let report = DocumentFormatter::new(DocumentEncoding::Yaml).format(&model).unwrap();
        let raw = parse(&report, RAW_ASSESSMENT_FILE);
        assert_eq!(&raw, model.response.raw());
    }

    #[test]
    fn test_yaml_encoding() {
        let model = ReportReadModelBuilder::build(response(), assets(), &metadata());
        let report = DocumentFormatter::new(DocumentEncoding::Yaml).format(&model).unwrap();

        let ssp = report
            .files
            .iter()
            .find(|f| f.filename == "fedramp-ssp.yaml")
            .unwrap();
        let parsed: serde_yaml_ng::Value = serde_yaml_ng::from_str(&ssp.content).unwrap();
        assert_eq!(
            parsed["system_security_plan"]["compliance_framework"]["version"],
            serde_yaml_ng::Value::String("rev5".to_string())
        );
    }

    #[test]
    fn test_fallback_framework_and_empty_warnings() {
        let response = AssessmentResponse::from_value(json!({"id": "x"})).unwrap();
        let model = ReportReadModelBuilder::build(response, Vec::new(), &metadata());
        let report = DocumentFormatter::new(DocumentEncoding::Json).format(&model).unwrap();

        assert_eq!(report.warnings.len(), 2);
        let ssp = parse(&report, "fedramp-ssp.json");
        let plan = &ssp["system_security_plan"];
        assert_eq!(plan["compliance_framework"]["framework"], json!("Unknown"));
        assert_eq!(plan["compliance_framework"]["version"], json!("Unknown"));
        assert_eq!(
            plan["compliance_framework"]["timestamp"],
            json!("2025-02-01T08:00:00+00:00")
        );
        assert_eq!(plan["compliance_summary"]["compliance_percentage"], json!(0.0));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(100.0), 100.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_agrees_with_summary_table_text() {
        // 1 of 800 satisfied
        let percentage = 1.0 / 800.0 * 100.0;
        assert_eq!(round2(percentage), 0.12);
        assert_eq!(format!("{:.2}%", percentage), "0.12%");
    }
}
