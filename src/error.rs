use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SbrError>;

/// Errors surfaced by the store, the key policy and the export reader.
#[derive(Debug, Error)]
pub enum SbrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid options: {reason}")]
    InvalidOptions { reason: String },

    #[error("invalid group period {value}: must be one of 0, 1 or 2")]
    InvalidGroupPeriod { value: u8 },

    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("invalid partition key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("base directory {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{} is not a regular file", path.display())]
    NotRegularFile { path: PathBuf },

    #[error("backup file {} already exists", path.display())]
    BackupExists { path: PathBuf },

    #[error("unexpected export document: {reason}")]
    InvalidExport { reason: String },
}
