//! Error types for the coordinator and its browser bindings

use thiserror::Error;

/// Result type for coordinator operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Coordinator errors.
///
/// None of these are fatal to the page: the caller logs them and the
/// affected behavior is simply not installed.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("no element matches '{0}'")]
    MissingElement(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("js error: {0}")]
    Js(String),
}

impl FolioError {
    pub fn missing(selector: impl Into<String>) -> Self {
        FolioError::MissingElement(selector.into())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        FolioError::InvalidConfig(reason.into())
    }
}
