//! Bridge from [`Log`] handles onto the `log` crate facade.

use crate::{Log, LogError, LogEvent, LogLevel};
use log::{Metadata, Record};
use std::sync::Arc;

/// Target used when no context has been applied.
const DEFAULT_TARGET: &str = "confhook";

/// Log that forwards events to whatever logger is installed for the `log`
/// crate. Contexts nest under the current target, `::`-separated.
#[derive(Debug, Clone)]
pub struct FacadeLog {
    target: String,
}

impl FacadeLog {
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Record target events are written under.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for FacadeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for FacadeLog {
    fn log(&self, event: LogEvent) -> Result<(), LogError> {
        if !self.is_enabled_for(event.level) {
            return Ok(());
        }
        let level = log::Level::from(event.level);
        let message = event.render_message();
        let logger = log::logger();
        match &event.error {
            Some(error) => logger.log(
                &Record::builder()
                    .level(level)
                    .target(&self.target)
                    .args(format_args!("{message} ({error})"))
                    .build(),
            ),
            None => logger.log(
                &Record::builder()
                    .level(level)
                    .target(&self.target)
                    .args(format_args!("{message}"))
                    .build(),
            ),
        }
        Ok(())
    }

    fn is_enabled_for(&self, level: LogLevel) -> bool {
        let level = log::Level::from(level);
        level <= log::max_level()
            && log::logger().enabled(&Metadata::builder().level(level).target(&self.target).build())
    }

    fn for_context(&self, context: &str) -> Arc<dyn Log> {
        Arc::new(Self::with_target(format!("{}::{context}", self.target)))
    }
}
