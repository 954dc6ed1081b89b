use crate::application::dto::{ReportRequest, ReportResponse, WrittenFile};
use crate::application::factories::FormatterFactory;
use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
use crate::ports::inbound::ReportGenerationPort;
use crate::ports::outbound::{
    ArtifactWriter, AssessmentRequest, AssessmentService, ProgressReporter, StateReader,
};
use crate::report_generation::domain::{AssessmentResponse, NormalizedAsset};
use crate::report_generation::services::{
    ArtifactDecoder, ArtifactFileKind, AssetNormalizer, MetadataGenerator, StateDecoder,
};
use crate::shared::Result;

/// GenerateReportUseCase - Core use case for compliance report generation
///
/// This use case orchestrates the whole run: read the encoded state, build
/// the local asset inventory, obtain the assessment, render the chosen
/// output mode and persist everything to the output directory.
///
/// # Type Parameters
/// * `SR` - StateReader implementation
/// * `AS` - AssessmentService implementation
/// * `W` - ArtifactWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<SR, AS, W, PR> {
    state_reader: SR,
    assessment_service: AS,
    artifact_writer: W,
    progress_reporter: PR,
    normalizer: AssetNormalizer,
}

impl<SR, AS, W, PR> GenerateReportUseCase<SR, AS, W, PR>
where
    SR: StateReader,
    AS: AssessmentService,
    W: ArtifactWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        state_reader: SR,
        assessment_service: AS,
        artifact_writer: W,
        progress_reporter: PR,
    ) -> Self {
        Self {
            state_reader,
            assessment_service,
            artifact_writer,
            progress_reporter,
            normalizer: AssetNormalizer::default(),
        }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Report request containing the state path and output options
    ///
    /// # Returns
    /// ReportResponse with the read model, the files written and every warning
    ///
    /// # Errors
    /// Reading the state, the assessment call and writing the rendered
    /// reports are fatal. Inventory extraction and artifact persistence only
    /// produce warnings.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let mut warnings = Vec::new();

        // Step 1: Read the encoded state
        let encoded_state = self.read_and_report_state(&request)?;

        // Step 2: Extract the asset inventory locally
        let assets = self.extract_assets(&encoded_state, &mut warnings);

        // Step 3: Submit the state for assessment
        let response = self.request_assessment(&request, &encoded_state)?;

        // Step 4: Build the read model
        let metadata = MetadataGenerator::generate_metadata();
        let read_model = ReportReadModelBuilder::build(response, assets, &metadata);

        // Step 5: Render and write the reports
        let mut written_files = self.write_reports(&request, &read_model, &mut warnings)?;

        // Step 6: Persist service artifacts (document modes only)
        if !request.format.is_tabular() {
            written_files.extend(self.save_artifacts(&read_model.response, &mut warnings));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Report generation complete: {} file(s) written",
            written_files.len()
        ));

        Ok(ReportResponse::new(read_model, written_files, warnings))
    }

    /// Reads the state blob, reporting progress
    fn read_and_report_state(&self, request: &ReportRequest) -> Result<String> {
        self.progress_reporter.report(&format!(
            "📖 Reading Terraform state from: {}",
            request.state_path.display()
        ));

        let content = self.state_reader.read_state(&request.state_path)?;
        let encoded_state = content.trim().to_string();

        self.progress_reporter.report(&format!(
            "✅ Terraform state loaded ({} bytes)",
            encoded_state.len()
        ));

        Ok(encoded_state)
    }

    fn extract_assets(
        &self,
        encoded_state: &str,
        warnings: &mut Vec<String>,
    ) -> Vec<NormalizedAsset> {
        self.progress_reporter.report("📦 Extracting asset inventory...");

        let decoded = StateDecoder::decode(encoded_state);
        for warning in decoded.warnings {
            self.warn(warning, warnings);
        }

        let assets = self.normalizer.normalize(&decoded.resources);
        self.progress_reporter
            .report(&format!("✅ Found {} assets", assets.len()));
        assets
    }

    fn request_assessment(
        &self,
        request: &ReportRequest,
        encoded_state: &str,
    ) -> Result<AssessmentResponse> {
        self.progress_reporter
            .report("🔍 Analyzing Terraform state for compliance...");

        let assessment_request = AssessmentRequest {
            name: request.name.clone(),
            format: request.format.service_format().to_string(),
            content_base64: encoded_state.to_string(),
            include_diagram: request.effective_include_diagram(),
        };
        let response = self.assessment_service.analyze(&assessment_request)?;

        self.progress_reporter.report(&format!(
            "✅ Assessment completed: {}",
            response.id_or_na()
        ));
        self.progress_reporter.report(&format!(
            "   Status: {}",
            response.status.as_deref().unwrap_or("N/A")
        ));
        self.progress_reporter.report(&format!(
            "   Created: {}",
            response.created_at.as_deref().unwrap_or("N/A")
        ));

        Ok(response)
    }

    /// Formats the read model and writes every rendered file.
    /// A failed write aborts the run.
    fn write_reports(
        &self,
        request: &ReportRequest,
        read_model: &ReportReadModel,
        warnings: &mut Vec<String>,
    ) -> Result<Vec<WrittenFile>> {
        self.progress_reporter
            .report(FormatterFactory::progress_message(request.format));

        let formatter = FormatterFactory::create(request.format);
        let formatted = formatter.format(read_model)?;
        for warning in formatted.warnings {
            self.warn(warning, warnings);
        }

        let mut written = Vec::with_capacity(formatted.files.len());
        for file in formatted.files {
            let path = self
                .artifact_writer
                .write_file(&file.filename, file.content.as_bytes())?;
            self.progress_reporter
                .report(&format!("✅ Saved {}: {}", file.label, path.display()));
            written.push(WrittenFile {
                label: file.label,
                path,
                size_bytes: file.content.len() as u64,
            });
        }

        Ok(written)
    }

    /// Decodes and writes each artifact. Failures are warnings; the
    /// remaining artifacts are still processed.
    fn save_artifacts(
        &self,
        response: &AssessmentResponse,
        warnings: &mut Vec<String>,
    ) -> Vec<WrittenFile> {
        let total = response.artifacts.len();
        let mut written = Vec::new();

        for (index, artifact) in response.artifacts.iter().enumerate() {
            let decoded = ArtifactDecoder::decode(index, artifact);
            for warning in decoded.warnings {
                self.warn(warning, warnings);
            }

            for file in decoded.files {
                match self.artifact_writer.write_file(&file.filename, &file.contents) {
                    Ok(path) => {
                        let label = match file.kind {
                            ArtifactFileKind::Payload => "Artifact",
                            ArtifactFileKind::Diagram => "Diagram",
                        };
                        written.push(WrittenFile {
                            label: label.to_string(),
                            path,
                            size_bytes: file.reported_size,
                        });
                    }
                    Err(e) => self.warn(
                        format!("Could not save artifact {}: {}", file.filename, e),
                        warnings,
                    ),
                }
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some("Saving artifacts"));
        }

        written
    }

    fn warn(&self, warning: String, warnings: &mut Vec<String>) {
        self.progress_reporter.report_warning(&warning);
        warnings.push(warning);
    }
}

impl<SR, AS, W, PR> ReportGenerationPort for GenerateReportUseCase<SR, AS, W, PR>
where
    SR: StateReader,
    AS: AssessmentService,
    W: ArtifactWriter,
    PR: ProgressReporter,
{
    fn generate_report(&self, request: ReportRequest) -> Result<ReportResponse> {
        self.execute(request)
    }
}
