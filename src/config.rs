//! Application configuration
//!
//! Settings are read from an optional TOML file. Every key is optional and
//! falls back to the defaults below:
//!
//! ```toml
//! data_dir = "./data"
//! export_dir = "./data/export"
//! max_file_size = 10485760
//! log_file = "dicomkit.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::dicom::errors::{DicomError, DicomResult};

/// Default upload size limit (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Runtime settings for the store, exporter and logger
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding uploaded files, named by their identifier
    pub data_dir: PathBuf,
    /// Directory receiving exported PNG files
    pub export_dir: PathBuf,
    /// Largest accepted upload in bytes
    pub max_file_size: u64,
    /// Log file path
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("./data"),
            export_dir: PathBuf::from("./data/export"),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            log_file: "dicomkit.log".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from TOML content
    pub fn from_str(content: &str) -> DicomResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| DicomError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = AppConfig::default();

        if let Some(dir) = Self::get_str(&toml_value, "data_dir")? {
            config.data_dir = PathBuf::from(dir);
            // The export directory follows a relocated data directory
            // unless it is configured explicitly
            config.export_dir = config.data_dir.join("export");
        }
        if let Some(dir) = Self::get_str(&toml_value, "export_dir")? {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(file) = Self::get_str(&toml_value, "log_file")? {
            config.log_file = file.to_string();
        }
        if let Some(value) = toml_value.get("max_file_size") {
            config.max_file_size = value
                .as_integer()
                .and_then(|v| u64::try_from(v).ok())
                .ok_or_else(|| DicomError::ConfigError("max_file_size must be a non-negative integer".to_string()))?;
        }

        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> DicomResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DicomError::ConfigError(format!("Cannot read {}: {}", path.display(), e)))?;

        Self::from_str(&contents)
    }

    /// Points the store at another data directory, moving the export
    /// directory along with it
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self.export_dir = self.data_dir.join("export");
        self
    }

    fn get_str<'v>(toml_value: &'v toml::Value, key: &str) -> DicomResult<Option<&'v str>> {
        match toml_value.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| DicomError::ConfigError(format!("{} must be a string", key))),
        }
    }
}
