/// Output format enumeration for report generation
///
/// This enum represents the supported output formats. It belongs in the
/// application layer as both the CLI (inbound adapter) and formatters
/// (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Four CSV tables: controls, findings, assets, summary
    Csv,
    /// SSP and inventory documents as pretty JSON (default)
    #[default]
    Json,
    /// SSP and inventory documents as YAML
    Yaml,
    /// JSON documents plus OSCAL artifacts requested from the service
    Oscal,
}

impl OutputFormat {
    /// Format value sent to the assessment service.
    /// The service has no CSV mode, so tabular runs request JSON.
    pub fn service_format(&self) -> &'static str {
        match self {
            OutputFormat::Csv | OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Oscal => "oscal",
        }
    }

    /// Whether this format produces the CSV table set
    pub fn is_tabular(&self) -> bool {
        matches!(self, OutputFormat::Csv)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "oscal" => Ok(OutputFormat::Oscal),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'csv', 'json', 'yaml' or 'oscal'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Oscal => write!(f, "oscal"),
        }
    }
}
