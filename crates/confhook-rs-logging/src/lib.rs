//! Logging hooks for configuration provider callbacks.
//!
//! [`ProviderSettingsLoggingExt`] wraps the error and settings callbacks of a
//! [`ProviderSettings`](confhook_rs_abstractions::ProviderSettings) so that,
//! after any previously installed behaviour runs, failures are logged at
//! error level and newly produced values are logged at info level.

mod error;
mod hooks;
mod options;
mod source;

/// Errors returned while installing hooks or loading options.
pub use error::LoggingError;
/// Hook installation and the messages they emit.
pub use hooks::{
    ERROR_MESSAGE, NULL_TYPE_NAME, PROVIDER_LOG_CONTEXT, ProviderSettingsLoggingExt,
    SETTINGS_TEMPLATE, try_with_error_logging, try_with_settings_logging,
};
/// Declarative hook configuration.
pub use options::LoggingOptions;
/// Direct or lazily resolved log handles.
pub use source::{LogProvider, LogSource};
