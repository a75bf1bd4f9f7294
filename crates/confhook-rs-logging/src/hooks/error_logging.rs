use super::{ERROR_MESSAGE, PROVIDER_LOG_CONTEXT};
use crate::LogSource;
use confhook_rs_abstractions::ProviderSettings;
use confhook_rs_log::LogExt;
use log::debug;

pub(super) fn install(settings: &mut ProviderSettings, log: LogSource) {
    let previous = settings.error_callback.take();
    debug!(
        "installing error logging hook (chained={})",
        previous.is_some()
    );

    settings.set_error_callback(move |error| {
        if let Some(previous) = &previous {
            previous(error)?;
        }

        let log = log.resolve()?.for_context(PROVIDER_LOG_CONTEXT);
        log.error(error.clone(), ERROR_MESSAGE, &[])?;
        Ok(())
    });
}
