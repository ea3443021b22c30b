use std::path::Path;
use std::fs;
use log::debug;

use crate::config::types::{DeckConfig, TocConfig};
use crate::utils::error::{BoxResult, TocError};

/// Top-level key holding the table of contents options in a deck config
const TOC_KEY: &str = "tableofcontents";

/// Load the deck configuration from a YAML, TOML or JSON file.
///
/// The file may either be a full deck configuration with a
/// `tableofcontents` section or a bare map of table of contents options.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> BoxResult<DeckConfig> {
    let config_path = config_path.as_ref();
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    debug!("Loading configuration from {}", config_path.display());

    // Parse based on file extension
    let value = match config_path.extension() {
        Some(ext) => {
            let ext_str = ext.to_string_lossy().to_lowercase();
            match ext_str.as_str() {
                "yml" | "yaml" => parse_yaml_config(&content, config_path)?,
                "toml" => parse_toml_config(&content, config_path)?,
                "json" => parse_json_config(&content, config_path)?,
                _ => {
                    return Err(TocError::Config(format!(
                        "Unsupported configuration file format: {}", ext.to_string_lossy()
                    )).into());
                }
            }
        }
        None => parse_yaml_config(&content, config_path)?,
    };

    let config = into_deck_config(value, config_path)?;
    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Load the configuration file if one was given, defaults otherwise
pub fn load_config_or_default<P: AsRef<Path>>(config_path: Option<P>) -> BoxResult<DeckConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => {
            debug!("No configuration file given, using defaults");
            Ok(DeckConfig::default())
        }
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<serde_yaml::Value> {
    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<serde_yaml::Value> {
    let value: toml::Value = toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))?;
    Ok(serde_yaml::to_value(value)?)
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<serde_yaml::Value> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )))?;
    Ok(serde_yaml::to_value(value)?)
}

/// Interpret a parsed document as a deck config or a bare options map
fn into_deck_config(value: serde_yaml::Value, path: &Path) -> BoxResult<DeckConfig> {
    let invalid = |e: serde_yaml::Error| TocError::Config(format!(
        "Invalid configuration ({}): {}", path.display(), e
    ));

    match &value {
        serde_yaml::Value::Null => Ok(DeckConfig::default()),
        serde_yaml::Value::Mapping(map) if map.contains_key(TOC_KEY) => {
            Ok(serde_yaml::from_value(value).map_err(invalid)?)
        }
        serde_yaml::Value::Mapping(_) => {
            debug!("No '{}' section in {}, reading bare options", TOC_KEY, path.display());
            let toc: TocConfig = serde_yaml::from_value(value).map_err(invalid)?;
            Ok(DeckConfig {
                tableofcontents: Some(toc),
                ..Default::default()
            })
        }
        _ => Err(TocError::Config(format!(
            "Configuration must be a map of options: {}", path.display()
        )).into()),
    }
}
