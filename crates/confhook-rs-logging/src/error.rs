//! Error types for hook installation and option loading.

use thiserror::Error;

/// Errors returned while installing logging hooks or loading their options.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A required argument was absent; nothing was modified.
    #[error("invalid argument: {0} must be present")]
    InvalidArgument(&'static str),
    /// Reading an options file failed.
    #[error("failed to read logging options: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing an options file failed.
    #[error("failed to parse logging options: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Converting parsed options failed.
    #[error("failed to decode logging options: {0}")]
    DecodeFailed(#[from] serde_json::Error),
}
