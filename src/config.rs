//! Configuration file support for dep-impact.
//!
//! Provides YAML-based configuration through `dep-impact.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line options.

use anyhow::Context;
use dep_impact::application::dto::OutputFormat;
use dep_impact::shared::error::ImpactError;
use dep_impact::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "dep-impact.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub fail_on_vulnerable: Option<bool>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Settings after applying CLI overrides on top of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedSettings {
    pub format: OutputFormat,
    pub fail_on_vulnerable: bool,
    pub quiet: bool,
}

impl ConfigFile {
    /// Parsed `format` value, if one was configured.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| {
                OutputFormat::from_str(f).map_err(|message| {
                    anyhow::Error::from(ImpactError::Validation {
                        message: format!("config field 'format': {}", message),
                    })
                })
            })
            .transpose()
    }

    /// Keys present in the file that this version does not understand.
    pub fn unknown_field_names(&self) -> impl Iterator<Item = &str> {
        self.unknown_fields.keys().map(String::as_str)
    }

    /// One warning line per unknown key, in key order
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_field_names()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null; treat it as "no settings"
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

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
    config.output_format()?;
    Ok(())
}

/// CLI values win over the config file; anything unset falls back to defaults.
pub fn resolve_settings(
    config: Option<&ConfigFile>,
    cli_format: Option<OutputFormat>,
    cli_fail_on_vulnerable: bool,
    cli_quiet: bool,
) -> Result<ResolvedSettings> {
    let config_format = match config {
        Some(c) => c.output_format()?,
        None => None,
    };

    Ok(ResolvedSettings {
        format: cli_format.or(config_format).unwrap_or_default(),
        fail_on_vulnerable: cli_fail_on_vulnerable
            || config.and_then(|c| c.fail_on_vulnerable).unwrap_or(false),
        quiet: cli_quiet || config.and_then(|c| c.quiet).unwrap_or(false),
    })
}
