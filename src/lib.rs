//! tfstate-ssp - compliance reporting for Terraform-managed infrastructure
//!
//! This library turns a base64-encoded Terraform state into a normalized
//! asset inventory, submits the state to an evidence service for a
//! multi-framework compliance assessment, and writes the result either as
//! CSV tables or as FedRAMP SSP and asset inventory documents.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_generation`): Assets, assessments, extractors and reshaping
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use tfstate_ssp::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let state_reader = FileSystemReader::new();
//! let assessment_service =
//!     EvidenceApiClient::new(DEFAULT_API_URL, std::env::var("NABLA_CUSTOMER_KEY")?)?;
//! let artifact_writer = OutputDirectoryWriter::new(PathBuf::from("output/compliance-report"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(
//!     state_reader,
//!     assessment_service,
//!     artifact_writer,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ReportRequest::new(
//!     PathBuf::from("terraform.tfstate.b64"),
//!     "compliance-assessment".to_string(),
//!     OutputFormat::Json,
//!     true,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Present the run summary
//! let summary = SummaryRenderer::new(false).render(&response);
//! StdoutPresenter::new().present(&summary)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrProgressReporter, StdoutPresenter, SummaryRenderer,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, OutputDirectoryWriter};
    pub use crate::adapters::outbound::formatters::{CsvFormatter, DocumentEncoding, DocumentFormatter};
    pub use crate::adapters::outbound::network::{EvidenceApiClient, DEFAULT_API_URL};
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse, WrittenFile};
    pub use crate::application::read_models::ReportReadModel;
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::inbound::ReportGenerationPort;
    pub use crate::ports::outbound::{
        ArtifactWriter, AssessmentRequest, AssessmentService, FormattedReport, OutputPresenter,
        ProgressReporter, RenderedFile, ReportFormatter, StateReader,
    };
    pub use crate::report_generation::domain::{
        AssessmentResponse, AssetField, NormalizedAsset, RawResourceRecord, ReportMetadata,
    };
    pub use crate::report_generation::services::{
        AssessmentReshaper, AssetNormalizer, StateDecoder,
    };
    pub use crate::shared::Result;
}
