/// Mock implementations for testing
mod mock_artifact_writer;
mod mock_assessment_service;
mod mock_progress_reporter;
mod mock_state_reader;

pub use mock_artifact_writer::MockArtifactWriter;
pub use mock_assessment_service::MockAssessmentService;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_state_reader::MockStateReader;
