//! Log handle trait and leveled helpers.

use crate::{LogError, LogEvent, LogLevel, SharedError};
use std::sync::Arc;

/// Sink for structured log events.
pub trait Log: Send + Sync {
    /// Write an event to the sink.
    fn log(&self, event: LogEvent) -> Result<(), LogError>;

    /// Whether events at `level` would be written.
    fn is_enabled_for(&self, level: LogLevel) -> bool;

    /// Return a handle of the same capability bound to a named origin.
    fn for_context(&self, context: &str) -> Arc<dyn Log>;
}

/// Leveled convenience methods available on every [`Log`].
///
/// Each helper checks [`Log::is_enabled_for`] first and skips the write when
/// the level is disabled.
pub trait LogExt: Log {
    /// Emit an event at `level` built from a template and ordered arguments.
    fn write(
        &self,
        level: LogLevel,
        error: Option<SharedError>,
        template: &str,
        args: &[(&str, String)],
    ) -> Result<(), LogError> {
        if !self.is_enabled_for(level) {
            return Ok(());
        }
        let mut event = LogEvent::new(level, template);
        for (name, value) in args {
            event = event.with_property(*name, value.clone());
        }
        if let Some(error) = error {
            event = event.with_error(error);
        }
        self.log(event)
    }

    fn debug(&self, template: &str, args: &[(&str, String)]) -> Result<(), LogError> {
        self.write(LogLevel::Debug, None, template, args)
    }

    fn info(&self, template: &str, args: &[(&str, String)]) -> Result<(), LogError> {
        self.write(LogLevel::Info, None, template, args)
    }

    fn warn(&self, template: &str, args: &[(&str, String)]) -> Result<(), LogError> {
        self.write(LogLevel::Warn, None, template, args)
    }

    /// Emit an error-level event carrying `error`.
    fn error(
        &self,
        error: SharedError,
        template: &str,
        args: &[(&str, String)],
    ) -> Result<(), LogError> {
        self.write(LogLevel::Error, Some(error), template, args)
    }
}

impl<L: Log + ?Sized> LogExt for L {}
