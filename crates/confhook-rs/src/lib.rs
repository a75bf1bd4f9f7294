//! Public surface for confhook.
//!
//! This crate re-exports the building blocks and provides a small
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use confhook_rs_abstractions as abstractions;
/// Re-export for convenience.
pub use confhook_rs_log as log;
/// Re-export for convenience.
pub use confhook_rs_logging as logging;
/// Re-export for convenience.
pub use confhook_rs_printing as printing;

/// Common imports for wiring logging hooks onto provider settings.
pub mod prelude {
    pub use confhook_rs_abstractions::{ConfigSource, ProviderSettings, SettingsValue};
    pub use confhook_rs_log::{FacadeLog, Log, LogExt, LogLevel};
    pub use confhook_rs_logging::{LogSource, LoggingOptions, ProviderSettingsLoggingExt};
    pub use confhook_rs_printing::PrintSettings;
}

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup so [`FacadeLog`](confhook_rs_log::FacadeLog)
/// output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
