use std::path::PathBuf;
use thiserror::Error;

/// Why a single input line could not be turned into a session record.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The line did not split into the expected number of `;` fields.
    #[error("expected {expected} ';'-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A timestamp field did not match `dd.MM.yyyy HH:mm:ss`.
    #[error("invalid {field} timestamp: {source}")]
    Timestamp {
        field: &'static str,
        #[source]
        source: chrono::format::ParseError,
    },

    /// The duration field is not an integer second count.
    #[error("invalid duration '{value}': {source}")]
    Duration {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Fatal errors surfaced at the application boundary.
///
/// Per-line and per-state anomalies never reach this type; they are logged
/// and skipped where they occur.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The configuration file could not be read from disk.
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file content did not deserialize.
    #[error("Failed to load configuration from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
