use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Application section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppConfig {
    /// Default input file path, relative to some ancestor of the working
    /// directory (resolved by walking upward at startup).
    pub input_file_path: String,
    /// Whether to write the diagnostic trace log. Off by default.
    #[serde(default)]
    pub enable_logging: bool,
}

/// Logging section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingConfig {
    /// Trace file name format; the `{}` placeholder is replaced with the
    /// run's UTC start time.
    pub log_file_name_format: String,
}

/// Full configuration loaded from `appsettings.json`.
///
/// Both sections are required; a missing file or section is a fatal startup
/// error surfaced before any report work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "AppConfig")]
    pub app: AppConfig,
    #[serde(rename = "Logging")]
    pub logging: LoggingConfig,
}

impl Config {
    /// Default configuration file name, looked up in the working directory.
    pub const DEFAULT_FILE_NAME: &'static str = "appsettings.json";

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Config, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ReportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
