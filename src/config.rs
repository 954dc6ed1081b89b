//! Configuration file support for tfstate-ssp.
//!
//! Provides YAML-based configuration through `tfstate-ssp.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "tfstate-ssp.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<String>,
    pub name: Option<String>,
    pub format: Option<String>,
    pub include_diagram: Option<bool>,
    pub api_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            return Err(ReportError::Validation {
                message: e,
                hint: "Use one of csv, json, yaml or oscal.".to_string(),
            }
            .into());
        }
    }

    if let Some(ref name) = config.name {
        if name.trim().is_empty() {
            return Err(ReportError::Validation {
                message: "name must not be empty".to_string(),
                hint: "Remove the 'name' field or give the assessment a display name."
                    .to_string(),
            }
            .into());
        }
    }

    if let Some(ref url) = config.api_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ReportError::Validation {
                message: format!("api_url '{}' is not an http(s) URL", url),
                hint: "Use a full URL such as \"https://api.joindelta.com\".".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
