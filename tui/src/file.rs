//! Reading configurations from files.

use displaydoc::Display;
use log::debug;
use sparselife_lib::Config;
use std::{fs, io, path::Path};
use thiserror::Error;

/// Errors when loading a configuration file.
#[derive(Debug, Display, Error)]
pub(crate) enum FileError {
    /// {0}
    Io(#[from] io::Error),
    /// invalid JSON: {0}
    Json(#[from] serde_json::Error),
    /// invalid YAML: {0}
    Yaml(#[from] serde_yaml::Error),
    /// invalid TOML: {0}
    Toml(#[from] toml::de::Error),
    /// unsupported file extension {0:?}, expected json, yaml, yml or toml
    Extension(String),
}

/// Loads a [`Config`] from a JSON, YAML or TOML file,
/// chosen by the file extension.
///
/// Missing fields take their default values.
pub(crate) fn load_config(path: &Path) -> Result<Config, FileError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if !matches!(extension.as_str(), "json" | "yaml" | "yml" | "toml") {
        return Err(FileError::Extension(extension));
    }
    let text = fs::read_to_string(path)?;
    let config: Config = match extension.as_str() {
        "json" => serde_json::from_str(&text)?,
        "yaml" | "yml" => serde_yaml::from_str(&text)?,
        _ => toml::from_str(&text)?,
    };
    debug!("loaded {:?} from {}", config, path.display());
    Ok(config)
}
