use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::network::DEFAULT_API_URL;
use crate::application::dto::OutputFormat;
use crate::config::ConfigFile;
use crate::shared::Result;

pub const DEFAULT_OUTPUT_DIR: &str = "output/compliance-report";
pub const DEFAULT_NAME: &str = "compliance-assessment";
pub const API_URL_ENV: &str = "NABLA_API_URL";
pub const CUSTOMER_KEY_ENV: &str = "NABLA_CUSTOMER_KEY";

/// Generate FedRAMP SSP documents and compliance CSV reports from Terraform state
#[derive(Parser, Debug)]
#[command(name = "tfstate-ssp")]
#[command(version)]
#[command(
    about = "Generate FedRAMP SSP documents and compliance CSV reports from Terraform state",
    long_about = None
)]
pub struct Args {
    /// Path to the base64-encoded Terraform state file
    #[arg(short, long, value_name = "PATH")]
    pub state: PathBuf,

    /// Directory the reports and artifacts are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Display name of the assessment
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output format: csv, json, yaml or oscal
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Do not ask the service for an architecture diagram
    #[arg(long)]
    pub no_diagram: bool,

    /// Path to a config file (defaults to tfstate-ssp.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the assessment service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

/// Options after merging CLI flags, the config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub state: PathBuf,
    pub output_dir: PathBuf,
    pub name: String,
    pub format: OutputFormat,
    pub include_diagram: bool,
    pub api_url: String,
}

impl Args {
    /// Merges with `config`; CLI flags win over config values, which win
    /// over the environment and built-in defaults.
    ///
    /// # Arguments
    /// * `config` - Loaded config file, if any
    /// * `env_api_url` - Value of `NABLA_API_URL`, if set
    pub fn resolve(
        &self,
        config: Option<&ConfigFile>,
        env_api_url: Option<String>,
    ) -> Result<ResolvedOptions> {
        let config_format = match config.and_then(|c| c.format.as_deref()) {
            Some(format) => Some(format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?),
            None => None,
        };

        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| config.and_then(|c| c.output_dir.as_ref().map(PathBuf::from)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let name = self
            .name
            .clone()
            .or_else(|| config.and_then(|c| c.name.clone()))
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let include_diagram = if self.no_diagram {
            false
        } else {
            config.and_then(|c| c.include_diagram).unwrap_or(true)
        };

        let api_url = self
            .api_url
            .clone()
            .or_else(|| config.and_then(|c| c.api_url.clone()))
            .or(env_api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(ResolvedOptions {
            state: self.state.clone(),
            output_dir,
            name,
            format: self.format.or(config_format).unwrap_or_default(),
            include_diagram,
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["tfstate-ssp"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_state_is_required() {
        assert!(Args::try_parse_from(["tfstate-ssp"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from(["tfstate-ssp", "--state", "s.b64", "--format", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["--state", "terraform.tfstate.b64"])
            .resolve(None, None)
            .unwrap();
        assert_eq!(options.state, PathBuf::from("terraform.tfstate.b64"));
        assert_eq!(options.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(options.name, DEFAULT_NAME);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.include_diagram);
        assert_eq!(options.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_overrides_defaults() {
        let config = ConfigFile {
            output_dir: Some("build/ssp".to_string()),
            name: Some("from-config".to_string()),
            format: Some("yaml".to_string()),
            include_diagram: Some(false),
            api_url: Some("https://config.example.com".to_string()),
            ..Default::default()
        };

        let options = parse(&["--state", "s.b64"])
            .resolve(Some(&config), Some("https://env.example.com".to_string()))
            .unwrap();
        assert_eq!(options.output_dir, PathBuf::from("build/ssp"));
        assert_eq!(options.name, "from-config");
        assert_eq!(options.format, OutputFormat::Yaml);
        assert!(!options.include_diagram);
        assert_eq!(options.api_url, "https://config.example.com");
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = ConfigFile {
            name: Some("from-config".to_string()),
            format: Some("yaml".to_string()),
            include_diagram: Some(true),
            ..Default::default()
        };

        let options = parse(&[
            "--state",
            "s.b64",
            "--name",
            "from-cli",
            "--format",
            "CSV",
            "--no-diagram",
            "--output-dir",
            "out",
        ])
        .resolve(Some(&config), None)
        .unwrap();
        assert_eq!(options.name, "from-cli");
        assert_eq!(options.format, OutputFormat::Csv);
        assert!(!options.include_diagram);
        assert_eq!(options.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_env_api_url_used_without_flag_or_config() {
        let options = parse(&["--state", "s.b64"])
            .resolve(None, Some("http://localhost:8080".to_string()))
            .unwrap();
        assert_eq!(options.api_url, "http://localhost:8080");

        let options = parse(&["--state", "s.b64", "--api-url", "https://cli.example.com"])
            .resolve(None, Some("http://localhost:8080".to_string()))
            .unwrap();
        assert_eq!(options.api_url, "https://cli.example.com");
    }
}
