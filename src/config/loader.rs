//! Settings file loading

use super::settings::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const NESTED_KEY: &str = "wg-kit";

pub fn load_settings(base_dir: &Path, config_path: Option<&Path>) -> Result<Settings> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(base_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Settings::default());
    };

    let parsed = read_settings(&config_file);
    match parsed {
        Ok(settings) => {
            tracing::debug!("loaded settings from {}", config_file.display());
            Ok(settings)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!("Ignoring settings file {}: {:#}", config_file.display(), e);
            Ok(Settings::default())
        }
    }
}

fn read_settings(config_file: &Path) -> Result<Settings> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading settings file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_settings(&content, config_file),
        "yaml" | "yml" => parse_yaml_settings(&content, config_file),
        other => anyhow::bail!(
            "Unsupported settings extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML settings, either top-level or nested under `[wg-kit]`.
fn parse_toml_settings(content: &str, config_file: &Path) -> Result<Settings> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let value = match raw.get(NESTED_KEY) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    value.try_into().with_context(|| format!("Invalid TOML settings: {}", config_file.display()))
}

/// Parse YAML settings, either top-level or nested under `wg-kit:`.
fn parse_yaml_settings(content: &str, config_file: &Path) -> Result<Settings> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses as null
    if raw.is_null() {
        return Ok(Settings::default());
    }

    let value = match raw.get(NESTED_KEY) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(value)
        .with_context(|| format!("Invalid YAML settings: {}", config_file.display()))
}

fn discover_settings(base_dir: &Path) -> Option<PathBuf> {
    let candidates = ["wg-kit.toml", ".wg-kit.toml", "wg-kit.yml", "wg-kit.yaml"];

    candidates.iter().map(|c| base_dir.join(c)).find(|path| path.is_file())
}
