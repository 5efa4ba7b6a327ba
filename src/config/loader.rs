//! JSON persistence for stored options
//!
//! The host owns real settings storage. This loader covers the standalone
//! case: one JSON document holding the option map and the presentation
//! preferences, written with defaults at install time and read per run.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::options::{default_options, validate_options, validate_presentation};
use super::types::{Presentation, Settings};
use crate::error::ConfigError;

/// Everything a render needs from storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOptions {
    #[serde(default)]
    pub options: Settings,
    #[serde(default)]
    pub presentation: Presentation,
}

impl Settings {
    /// Parse and clean an option map from JSON text.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a non-object document or a cleaning failure.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: Value = serde_json::from_str(json)?;
        validate_options(&raw)
    }

    /// Read, parse and clean an option map file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its content is rejected.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read_to_string(path.as_ref())?)
    }
}

impl StoredOptions {
    /// Load a stored options document, cleaning both sections.
    ///
    /// Missing sections take their declared defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its content is rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw: Value = serde_json::from_str(&read_to_string(path.as_ref())?)?;
        let empty = Value::Object(serde_json::Map::new());

        let options = validate_options(raw.get("options").unwrap_or(&empty))?;
        let presentation = validate_presentation(raw.get("presentation").unwrap_or(&empty))?;

        Ok(Self {
            options,
            presentation,
        })
    }

    /// Write this document as pretty JSON.
    ///
    /// # Errors
    ///
    /// Fails on serialization or I/O errors.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Install-time initialisation: write the declared defaults unless a
    /// document already exists. Returns whether a file was written.
    ///
    /// # Errors
    ///
    /// Fails on serialization or I/O errors.
    pub fn write_defaults(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::debug!("Options file {} already present", path.display());
            return Ok(false);
        }

        let document = serde_json::json!({
            "options": Value::Object(default_options()?),
            "presentation": Presentation::default(),
        });
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Wrote default options to {}", path.display());
        Ok(true)
    }
}

fn read_to_string(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
