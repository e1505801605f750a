//! Configuration file support for sbom-enrich.
//!
//! Provides YAML-based configuration through `sbom-enrich.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sbom_enrich::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-enrich.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// General CycloneDX → SPDX mapping table; built-in when absent
    pub field_mappings: Option<PathBuf>,
    /// AI profile mapping table; built-in when absent
    pub ai_field_mappings: Option<PathBuf>,
    pub annotator: Option<String>,
    pub output: Option<PathBuf>,
    /// Field names never translated across schemas
    pub exclude_fields: Option<Vec<String>>,
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
    let paths = [
        ("field_mappings", &config.field_mappings),
        ("ai_field_mappings", &config.ai_field_mappings),
        ("output", &config.output),
    ];
    for (key, path) in paths {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default, or give a file path.",
                key
            );
        }
    }

    if config
        .annotator
        .as_ref()
        .is_some_and(|annotator| annotator.trim().is_empty())
    {
        bail!(
            "Invalid config: annotator must not be empty.\n\n\
             💡 Hint: SPDX annotators look like \"Tool: <name>\" or \"Person: <name>\"."
        );
    }

    if let Some(ref fields) = config.exclude_fields {
        for (i, field) in fields.iter().enumerate() {
            if field.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_fields[{}] must not be empty.\n\n\
                     💡 Hint: Each entry names a model-card property (e.g., \"licenses\").",
                    i
                );
            }
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
