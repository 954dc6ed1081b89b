pub mod assessment;
pub mod asset;
pub mod report_metadata;
pub mod resource;
pub mod tables;

pub use assessment::{
    ArtifactDescriptor, AssessmentResponse, ComplianceAssessmentView, ControlRecord,
    ControlStatus, ControlSummary, FrameworkKey,
};
pub use asset::{AssetField, AssetFields, NormalizedAsset};
pub use report_metadata::ReportMetadata;
pub use resource::{Attributes, InstanceRecord, RawResourceRecord};
pub use tables::{ControlRow, FindingRow, SummaryRow, LIST_DELIMITER};
