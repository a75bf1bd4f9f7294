//! Error types for provider callbacks.

use confhook_rs_log::LogError;
use thiserror::Error;

/// Errors returned from a provider callback.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// A required argument resolved to nothing.
    #[error("invalid argument: {0} must be present")]
    InvalidArgument(&'static str),
    /// Writing to the log failed.
    #[error("logging failed: {0}")]
    Log(#[from] LogError),
    /// A user-supplied callback failed.
    #[error("callback failed: {0}")]
    Failed(#[from] anyhow::Error),
}
