//! Log implementation that discards everything.

use crate::{Log, LogError, LogEvent, LogLevel};
use std::sync::Arc;

/// Log that accepts and drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLog;

impl Log for SilentLog {
    fn log(&self, _event: LogEvent) -> Result<(), LogError> {
        Ok(())
    }

    fn is_enabled_for(&self, _level: LogLevel) -> bool {
        false
    }

    fn for_context(&self, _context: &str) -> Arc<dyn Log> {
        Arc::new(SilentLog)
    }
}
