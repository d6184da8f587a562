//! Error types for mediasearch

use thiserror::Error;

/// Result type alias using MediaSearchError
pub type Result<T> = std::result::Result<T, MediaSearchError>;

/// Error type alias for convenience
pub type Error = MediaSearchError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for mediasearch
///
/// Feature extraction itself never fails; these cover loading queries,
/// configuration and builder selection around it.
#[derive(Debug, Error)]
pub enum MediaSearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown LTR model: {0}")]
    UnknownModel(String),
}

impl MediaSearchError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownModel(_)
            | Self::Config(_)
            | Self::Serialization(_)
            | Self::Yaml(_) => exit_codes::INVALID_INPUT,
            Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
