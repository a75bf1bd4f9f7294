//! Hooks that enrich provider callbacks with logging.
//!
//! Each hook reads the current callback out of its slot, installs a wrapper
//! that calls the previous callback first and logs second, and hands the
//! settings back for chaining. Installing a hook twice logs twice.

mod error_logging;
mod settings_logging;

use crate::{LogSource, LoggingError};
use confhook_rs_abstractions::ProviderSettings;
use confhook_rs_printing::PrintSettings;

/// Context every hook specialises its log handle to.
pub const PROVIDER_LOG_CONTEXT: &str = "ConfigurationProvider";
/// Message logged with every provider failure.
pub const ERROR_MESSAGE: &str = "An error has occurred in configuration provider.";
/// Template logged with every newly produced value.
pub const SETTINGS_TEMPLATE: &str = "Initialized new settings of type '{SettingsType}' from source of type '{SourceType}': \n{SettingsObject}";
/// Type name reported for an absent value or source.
pub const NULL_TYPE_NAME: &str = "null";

/// Logging hooks for [`ProviderSettings`].
pub trait ProviderSettingsLoggingExt {
    /// Log every provider failure at error level, after the existing error
    /// callback (if any) has run.
    fn with_error_logging(&mut self, log: impl Into<LogSource>) -> &mut Self;

    /// Log every newly produced value at info level, after the existing
    /// settings callback (if any) has run. Values are rendered with
    /// [`ConfigurationPrinter`](confhook_rs_printing::ConfigurationPrinter)
    /// using `print_settings`, or its defaults.
    fn with_settings_logging(
        &mut self,
        log: impl Into<LogSource>,
        print_settings: Option<PrintSettings>,
    ) -> &mut Self;
}

impl ProviderSettingsLoggingExt for ProviderSettings {
    fn with_error_logging(&mut self, log: impl Into<LogSource>) -> &mut Self {
        error_logging::install(self, log.into());
        self
    }

    fn with_settings_logging(
        &mut self,
        log: impl Into<LogSource>,
        print_settings: Option<PrintSettings>,
    ) -> &mut Self {
        settings_logging::install(self, log.into(), print_settings);
        self
    }
}

/// Install error logging when both arguments are present.
///
/// Fails with [`LoggingError::InvalidArgument`] without touching `settings`
/// when either is missing.
pub fn try_with_error_logging(
    settings: Option<&mut ProviderSettings>,
    log: Option<LogSource>,
) -> Result<&mut ProviderSettings, LoggingError> {
    let settings = settings.ok_or(LoggingError::InvalidArgument("settings"))?;
    let log = log.ok_or(LoggingError::InvalidArgument("log"))?;
    Ok(settings.with_error_logging(log))
}

/// Install settings logging when both required arguments are present.
///
/// Fails with [`LoggingError::InvalidArgument`] without touching `settings`
/// when either is missing.
pub fn try_with_settings_logging(
    settings: Option<&mut ProviderSettings>,
    log: Option<LogSource>,
    print_settings: Option<PrintSettings>,
) -> Result<&mut ProviderSettings, LoggingError> {
    let settings = settings.ok_or(LoggingError::InvalidArgument("settings"))?;
    let log = log.ok_or(LoggingError::InvalidArgument("log"))?;
    Ok(settings.with_settings_logging(log, print_settings))
}
