use super::{NULL_TYPE_NAME, PROVIDER_LOG_CONTEXT, SETTINGS_TEMPLATE};
use crate::LogSource;
use confhook_rs_abstractions::{ProviderSettings, short_type_name};
use confhook_rs_log::{LogExt, LogLevel};
use confhook_rs_printing::{ConfigurationPrinter, PrintSettings};
use log::debug;

pub(super) fn install(
    settings: &mut ProviderSettings,
    log: LogSource,
    print_settings: Option<PrintSettings>,
) {
    let previous = settings.settings_callback.take();
    debug!(
        "installing settings logging hook (chained={}, print_settings={:?})",
        previous.is_some(),
        print_settings
    );

    settings.set_settings_callback(move |value, source| {
        if let Some(previous) = &previous {
            previous(value, source)?;
        }

        let log = log.resolve()?.for_context(PROVIDER_LOG_CONTEXT);
        // Rendering may be costly for large values.
        if !log.is_enabled_for(LogLevel::Info) {
            return Ok(());
        }

        let settings_type = value
            .map(|value| short_type_name(value.type_name()))
            .unwrap_or_else(|| NULL_TYPE_NAME.to_string());
        let source_type = source
            .map(|source| short_type_name(source.type_name()))
            .unwrap_or_else(|| NULL_TYPE_NAME.to_string());
        let rendered = ConfigurationPrinter::print(value, print_settings.as_ref());

        log.info(
            SETTINGS_TEMPLATE,
            &[
                ("SettingsType", settings_type),
                ("SourceType", source_type),
                ("SettingsObject", rendered),
            ],
        )?;
        Ok(())
    });
}
