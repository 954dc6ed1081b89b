use clap::error::ErrorKind;
use clap::Parser;
use std::io::IsTerminal;
use std::process;

use tfstate_ssp::adapters::outbound::console::{
    StderrProgressReporter, StdoutPresenter, SummaryRenderer,
};
use tfstate_ssp::adapters::outbound::filesystem::{FileSystemReader, OutputDirectoryWriter};
use tfstate_ssp::adapters::outbound::network::EvidenceApiClient;
use tfstate_ssp::application::dto::ReportRequest;
use tfstate_ssp::application::use_cases::GenerateReportUseCase;
use tfstate_ssp::cli::{Args, ResolvedOptions, API_URL_ENV, CUSTOMER_KEY_ENV};
use tfstate_ssp::config::{discover_config, load_config_from_path, ConfigFile};
use tfstate_ssp::ports::outbound::OutputPresenter;
use tfstate_ssp::shared::error::{ExitCode, ReportError};
use tfstate_ssp::shared::Result;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            // clap routes help to stdout and usage errors to stderr
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Load config file (explicit path or auto-discovery)
    let config = load_config(&args)?;
    let options = args.resolve(config.as_ref(), std::env::var(API_URL_ENV).ok())?;

    let customer_key = std::env::var(CUSTOMER_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ReportError::MissingApiKey {
            variable: CUSTOMER_KEY_ENV.to_string(),
        })?;

    print_banner(&options);

    // Create adapters (Dependency Injection)
    let state_reader = FileSystemReader::new();
    let assessment_service = EvidenceApiClient::new(&options.api_url, customer_key)?;
    let artifact_writer = OutputDirectoryWriter::new(options.output_dir.clone());
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateReportUseCase::new(
        state_reader,
        assessment_service,
        artifact_writer,
        progress_reporter,
    );

    let request = ReportRequest::new(
        options.state,
        options.name,
        options.format,
        options.include_diagram,
    );

    // Execute use case
    let response = use_case.execute(request)?;

    // Present the run summary
    let renderer = SummaryRenderer::new(std::io::stdout().is_terminal());
    let presenter = StdoutPresenter::new();
    presenter.present(&renderer.render(&response))?;
    presenter.present(&format!(
        "\n📂 All artifacts saved to: {}\n",
        options.output_dir.display()
    ))?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(&std::env::current_dir()?),
    }
}

fn print_banner(options: &ResolvedOptions) {
    let rule = "=".repeat(70);
    eprintln!("{}", rule);
    eprintln!("🚀 FedRAMP SSP and Compliance Report Generator");
    eprintln!("{}", rule);
    eprintln!("API URL:          {}", options.api_url);
    eprintln!("Terraform State:  {}", options.state.display());
    eprintln!("Output Directory: {}", options.output_dir.display());
    eprintln!("Output Format:    {}", options.format);
    eprintln!("{}", rule);
}
