//! Configuration provider settings and the types flowing through their
//! callbacks.
//!
//! Providers own a [`ProviderSettings`] and call into its error and settings
//! callbacks; everything else in the workspace reads and replaces those
//! callback slots.

mod error;
mod settings;
mod source;
mod value;

/// Errors surfaced by provider callbacks.
pub use error::CallbackError;
/// Error value handed to error callbacks.
pub use confhook_rs_log::SharedError;
/// Provider settings and callback types.
pub use settings::{ErrorCallback, ProviderSettings, SettingsCallback};
/// Configuration source marker.
pub use source::ConfigSource;
/// Open-typed settings values and type-name helpers.
pub use value::{SettingsValue, short_type_name};
