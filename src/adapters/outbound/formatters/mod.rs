/// Formatter adapters for the tabular and nested-document report modes
mod csv_formatter;
mod document_formatter;

pub use csv_formatter::{CsvFormatter, ASSETS_CSV, CONTROLS_CSV, FINDINGS_CSV, SUMMARY_CSV};
pub use document_formatter::{
    DocumentEncoding, DocumentFormatter, ASSET_INVENTORY_STEM, RAW_ASSESSMENT_FILE, SSP_STEM,
};
