use crate::domain::constants::{
    EXIT_FILESYSTEM_FAILURE, EXIT_INVALID_METADATA, EXIT_UNSUPPORTED_PLATFORM,
};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum FactError {
    #[error("invalid metadata: {field}: {reason}")]
    InvalidMetadata { field: &'static str, reason: String },
    #[error("filesystem failure at {}: {source}", path.display())]
    FilesystemFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl FactError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FactError::InvalidMetadata {
            field,
            reason: reason.into(),
        }
    }

    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FactError::FilesystemFailure {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FactError::InvalidMetadata { .. } => "invalid_metadata",
            FactError::FilesystemFailure { .. } => "filesystem_failure",
            FactError::UnsupportedPlatform(_) => "unsupported_platform",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            FactError::InvalidMetadata { .. } => EXIT_INVALID_METADATA,
            FactError::FilesystemFailure { .. } => EXIT_FILESYSTEM_FAILURE,
            FactError::UnsupportedPlatform(_) => EXIT_UNSUPPORTED_PLATFORM,
        }
    }
}
