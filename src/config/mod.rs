mod schema;

pub use schema::LoaderConfig;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/acft-calc/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("acft-calc"))
}

/// Get the default config file path (~/.config/acft-calc/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load loader configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///
/// # Errors
///
/// Returns an error if:
/// - No path was given and the platform has no config directory
/// - The config file does not exist or cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<LoaderConfig> {
    let config_path = match path.or_else(get_config_path) {
        Some(p) => p,
        None => anyhow::bail!("No config path given and no config directory on this platform"),
    };

    if !config_path.exists() {
        anyhow::bail!("Config file not found at {}", config_path.display());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: LoaderConfig = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

/// Validate loader configuration.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &LoaderConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Characters that appear inside cells ("3:05", "4.5", "-1") can't separate them
    let delimiter = config.delimiter();
    if matches!(delimiter, ':' | '.' | '-' | '+') || delimiter.is_ascii_digit() {
        errors.push(format!(
            "delimiter: '{}' can appear inside cell values",
            delimiter
        ));
    }
    if delimiter.is_whitespace() {
        errors.push("delimiter: whitespace is trimmed from cells".to_string());
    }

    if let Some(ref source) = config.source {
        if source.as_os_str().is_empty() {
            errors.push("source: must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
