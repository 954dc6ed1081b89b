/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod artifact_writer;
pub mod assessment_service;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod state_reader;

pub use artifact_writer::ArtifactWriter;
pub use assessment_service::{AssessmentRequest, AssessmentService};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::{FormattedReport, RenderedFile, ReportFormatter};
pub use state_reader::StateReader;
