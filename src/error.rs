use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a fingerprint run
///
/// Identifier reads never produce one of these; an unreadable source is
/// simply absent from the identifier set.
#[derive(Error, Debug)]
pub enum FingerprintError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to serialize report: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FingerprintError>;
