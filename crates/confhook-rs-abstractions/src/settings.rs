//! Provider settings holding the error and settings callbacks.

use crate::{CallbackError, ConfigSource, SettingsValue, SharedError};
use std::fmt;
use std::sync::Arc;

/// Invoked when the provider fails to load or parse a value.
pub type ErrorCallback = Arc<dyn Fn(&SharedError) -> Result<(), CallbackError> + Send + Sync>;

/// Invoked when the provider produces a new value from a source.
pub type SettingsCallback = Arc<
    dyn Fn(Option<&dyn SettingsValue>, Option<&dyn ConfigSource>) -> Result<(), CallbackError>
        + Send
        + Sync,
>;

/// Callback slots consulted by a configuration provider.
///
/// Both slots start empty. Cloning shares the installed callbacks.
#[derive(Clone, Default)]
pub struct ProviderSettings {
    /// Called with every load or parse failure.
    pub error_callback: Option<ErrorCallback>,
    /// Called with every newly produced value and its source.
    pub settings_callback: Option<SettingsCallback>,
}

impl ProviderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an error callback, replacing any existing one.
    pub fn with_error_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SharedError) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.set_error_callback(callback);
        self
    }

    /// Install a settings callback, replacing any existing one.
    pub fn with_settings_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(Option<&dyn SettingsValue>, Option<&dyn ConfigSource>) -> Result<(), CallbackError>
            + Send
            + Sync
            + 'static,
    {
        self.set_settings_callback(callback);
        self
    }

    pub fn set_error_callback<F>(&mut self, callback: F)
    where
        F: Fn(&SharedError) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.error_callback = Some(Arc::new(callback));
    }

    pub fn set_settings_callback<F>(&mut self, callback: F)
    where
        F: Fn(Option<&dyn SettingsValue>, Option<&dyn ConfigSource>) -> Result<(), CallbackError>
            + Send
            + Sync
            + 'static,
    {
        self.settings_callback = Some(Arc::new(callback));
    }

    /// Forward a provider failure to the error callback, if one is set.
    pub fn report_error(&self, error: &SharedError) -> Result<(), CallbackError> {
        match &self.error_callback {
            Some(callback) => callback(error),
            None => Ok(()),
        }
    }

    /// Forward a produced value to the settings callback, if one is set.
    ///
    /// Values held behind a smart pointer must be passed by their contents
    /// (`Some(&*boxed)` or `Some(boxed.as_ref())`). The pointer itself is a
    /// [`SettingsValue`] too, so passing `Some(&boxed)` reports the pointer's
    /// type and defeats downcasting in callbacks.
    pub fn report_settings(
        &self,
        value: Option<&dyn SettingsValue>,
        source: Option<&dyn ConfigSource>,
    ) -> Result<(), CallbackError> {
        match &self.settings_callback {
            Some(callback) => callback(value, source),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("error_callback", &self.error_callback.is_some())
            .field("settings_callback", &self.settings_callback.is_some())
            .finish()
    }
}
