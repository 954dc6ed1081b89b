use crate::application::read_models::{tabular_projection, ReportReadModel};
use crate::ports::outbound::{FormattedReport, RenderedFile, ReportFormatter};
use crate::shared::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub const CONTROLS_CSV: &str = "controls.csv";
pub const FINDINGS_CSV: &str = "findings.csv";
pub const ASSETS_CSV: &str = "assets.csv";
pub const SUMMARY_CSV: &str = "summary.csv";

/// CsvFormatter adapter for the tabular report set
///
/// This adapter implements the ReportFormatter port. Each of the four
/// tables is written independently; an empty table is skipped with a notice.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Serializes fixed-shape rows; the header comes from the row's field order
    fn fixed_table<T: Serialize>(rows: &[T]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row)?;
        }
        Self::finish(writer)
    }

    /// Assets table: columns are the sorted union of every asset's fields.
    /// Missing cells are blank.
    fn assets_table(model: &ReportReadModel) -> Result<String> {
        let rows: Vec<BTreeMap<String, String>> =
            model.assets.iter().map(tabular_projection).collect();
        let columns: BTreeSet<&str> = rows
            .iter()
            .flat_map(|cells| cells.keys().map(String::as_str))
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&columns)?;
        for cells in &rows {
            writer.write_record(
                columns
                    .iter()
                    .map(|column| cells.get(*column).map(String::as_str).unwrap_or("")),
            )?;
        }
        Self::finish(writer)
    }

    fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    fn push_table(
        report: &mut FormattedReport,
        filename: &str,
        label: &str,
        count: usize,
        noun: &str,
        render: impl FnOnce() -> Result<String>,
    ) -> Result<()> {
        if count == 0 {
            report.warnings.push(format!("No {} to write to CSV", noun));
            return Ok(());
        }
        report.files.push(RenderedFile {
            filename: filename.to_string(),
            label: format!("{} ({} {})", label, count, noun),
            content: render()?,
        });
        Ok(())
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<FormattedReport> {
        let mut report = FormattedReport::default();

        Self::push_table(
            &mut report,
            CONTROLS_CSV,
            "Controls CSV",
            model.controls.len(),
            "controls",
            || Self::fixed_table(&model.controls),
        )?;
        Self::push_table(
            &mut report,
            FINDINGS_CSV,
            "Findings CSV",
            model.findings.len(),
            "findings",
            || Self::fixed_table(&model.findings),
        )?;
        Self::push_table(
            &mut report,
            ASSETS_CSV,
            "Asset Inventory CSV",
            model.assets.len(),
            "assets",
            || Self::assets_table(model),
        )?;
        Self::push_table(
            &mut report,
            SUMMARY_CSV,
            "Summary CSV",
            model.summary.len(),
            "frameworks",
            || Self::fixed_table(&model.summary),
        )?;

        Ok(report)
    }
}
