//! Error and diagnostic types for level generation.

use std::path::PathBuf;

use thiserror::Error;

/// Hard failures. Generation stops and the caller decides whether to regenerate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("noise field produced no open cells")]
    NoRegionsDetected,

    #[error("found {found} distinct rooms, need at least {required} to place objects")]
    InsufficientRooms { found: usize, required: usize },
}

impl GenerationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GenerationError::InvalidConfiguration { reason: reason.into() }
    }

    /// Whether a fresh random draw could make this failure go away.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationError::NoRegionsDetected | GenerationError::InsufficientRooms { .. }
        )
    }
}

/// Soft problems noticed during generation. These are recorded and logged; they never abort.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationWarning {
    #[error("centroid of region {region} at ({row}, {col}) is not an open cell")]
    DegenerateCentroid { region: usize, row: i32, col: i32 },
}

/// Failures loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
