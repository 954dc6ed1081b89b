//! Report read model for query operations
//!
//! Aggregates everything the formatters and the console summary need,
//! already reshaped, so adapters never touch the raw response.

use crate::report_generation::domain::{
    AssessmentResponse, ControlRow, FindingRow, NormalizedAsset, SummaryRow,
};
use crate::report_generation::services::SelectedFramework;
use std::collections::BTreeMap;

/// Grouping key for assets that lack the grouped field
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Main read model for one report run
#[derive(Debug, Clone)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    /// The service response as received; written verbatim as `raw-assessment.json`
    pub response: AssessmentResponse,
    pub assets: Vec<NormalizedAsset>,
    pub controls: Vec<ControlRow>,
    pub findings: Vec<FindingRow>,
    pub summary: Vec<SummaryRow>,
    /// Framework the SSP document is written for
    pub selected: SelectedFramework,
}

/// View representation of run metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub document_uuid: String,
}

impl ReportReadModel {
    pub fn total_assets(&self) -> usize {
        self.assets.len()
    }

    /// Asset counts grouped by the text value of `field`.
    /// Assets without the field are counted under `"Unknown"`.
    pub fn count_assets_by(&self, field: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for asset in &self.assets {
            let key = asset.text_field(field).unwrap_or(UNKNOWN_GROUP);
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
        counts
    }
}
