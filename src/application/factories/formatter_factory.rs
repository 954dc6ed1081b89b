use crate::adapters::outbound::formatters::{CsvFormatter, DocumentEncoding, DocumentFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use tfstate_ssp::application::dto::OutputFormat;
    /// use tfstate_ssp::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Json | OutputFormat::Oscal => {
                Box::new(DocumentFormatter::new(DocumentEncoding::Json))
            }
            OutputFormat::Yaml => Box::new(DocumentFormatter::new(DocumentEncoding::Yaml)),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use tfstate_ssp::application::dto::OutputFormat;
    /// use tfstate_ssp::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Csv);
    /// assert_eq!(message, "📝 Generating CSV reports...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Generating CSV reports...",
            OutputFormat::Json => "📝 Generating FedRAMP SSP and Asset Inventory (JSON)...",
            OutputFormat::Yaml => "📝 Generating FedRAMP SSP and Asset Inventory (YAML)...",
            OutputFormat::Oscal => {
                "📝 Generating FedRAMP SSP and Asset Inventory (JSON, OSCAL artifacts)..."
            }
        }
    }
}
