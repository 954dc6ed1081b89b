use serde::Serialize;

/// Delimiter used when a list of findings or evidence is squeezed into one cell
pub const LIST_DELIMITER: &str = " | ";

/// One row per control, across all present frameworks.
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlRow {
    pub framework: String,
    pub version: String,
    pub control_id: String,
    pub title: String,
    pub status: String,
    pub findings_count: usize,
    pub evidence_count: usize,
    pub findings: String,
    pub evidence: String,
}

/// One row per (control, finding) pair; controls without findings still get one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingRow {
    pub framework: String,
    pub version: String,
    pub control_id: String,
    pub control_title: String,
    pub status: String,
    pub finding: String,
    pub severity: String,
}

/// One row per present framework
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub assessment_id: String,
    pub framework: String,
    pub version: String,
    pub timestamp: String,
    pub total_controls: u64,
    pub satisfied: u64,
    pub not_satisfied: u64,
    pub not_applicable: u64,
    /// Formatted as `"66.67%"`
    pub compliance_percentage: String,
    pub total_assets: usize,
}
