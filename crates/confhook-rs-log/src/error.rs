//! Error types for log sinks.

use thiserror::Error;

/// Errors returned while writing a log event.
#[derive(Debug, Error)]
pub enum LogError {
    /// The sink could not be reached.
    #[error("log sink unavailable: {0}")]
    SinkUnavailable(String),
    /// The sink accepted the event but failed to persist it.
    #[error("failed to write log event: {0}")]
    WriteFailed(String),
}
