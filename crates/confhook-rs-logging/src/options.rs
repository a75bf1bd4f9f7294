//! Declarative configuration of the logging hooks.

use crate::{LogSource, LoggingError, ProviderSettingsLoggingExt};
use confhook_rs_abstractions::ProviderSettings;
use confhook_rs_printing::PrintSettings;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Which hooks to install and how to render logged values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingOptions {
    /// Install the error logging hook.
    pub log_errors: bool,
    /// Install the settings logging hook.
    pub log_settings: bool,
    /// Rendering options for logged values.
    pub print: PrintSettings,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            log_errors: true,
            log_settings: true,
            print: PrintSettings::default(),
        }
    }
}

impl LoggingOptions {
    /// Load options from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, LoggingError> {
        info!(
            "loading logging options from path: {}",
            path.as_ref().display()
        );
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load options from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, LoggingError> {
        debug!("loading logging options (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Install the enabled hooks on `settings`, error logging first.
    pub fn apply<'a>(
        &self,
        settings: &'a mut ProviderSettings,
        log: impl Into<LogSource>,
    ) -> &'a mut ProviderSettings {
        let log = log.into();
        if self.log_errors {
            settings.with_error_logging(log.clone());
        }
        if self.log_settings {
            settings.with_settings_logging(log, Some(self.print.clone()));
        }
        settings
    }
}
