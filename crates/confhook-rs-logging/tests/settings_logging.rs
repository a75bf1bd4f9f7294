//! Tests for the settings logging hook.

use confhook_rs_abstractions::{CallbackError, ConfigSource, ProviderSettings};
use confhook_rs_log::{Log, LogLevel};
use confhook_rs_logging::{
    LogSource, LoggingError, NULL_TYPE_NAME, PROVIDER_LOG_CONTEXT, ProviderSettingsLoggingExt,
    SETTINGS_TEMPLATE, try_with_settings_logging,
};
use confhook_rs_printing::PrintSettings;
use confhook_rs_test_utils::{FailingLog, RecordingLog, TestSource};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
#[allow(dead_code)]
struct ServiceSettings {
    name: String,
    replicas: u8,
}

struct RemoteSource;

impl ConfigSource for RemoteSource {}

/// With no previous callback, one info event names both types.
#[test]
fn sets_settings_callback_when_none_exists() {
    let log = RecordingLog::new();
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(log.as_log(), None);
    assert!(settings.settings_callback.is_some());

    settings
        .report_settings(Some(&42_i32), Some(&TestSource))
        .expect("callback");

    let events = log.events();
    assert_eq!(events.len(), 1);
    let recorded = &events[0];
    assert_eq!(recorded.event.level, LogLevel::Info);
    assert_eq!(recorded.context.as_deref(), Some(PROVIDER_LOG_CONTEXT));
    assert_eq!(recorded.event.message_template, SETTINGS_TEMPLATE);
    assert_eq!(
        recorded.event.render_message(),
        "Initialized new settings of type 'i32' from source of type 'TestSource': \n42"
    );
}

/// Properties are supplied in template order.
#[test]
fn properties_follow_template_order() {
    let log = RecordingLog::new();
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(log.as_log(), Some(PrintSettings::compact()));

    let value = ServiceSettings {
        name: "api".to_string(),
        replicas: 3,
    };
    settings
        .report_settings(Some(&value), Some(&RemoteSource))
        .expect("callback");

    let events = log.events();
    let names = events[0]
        .event
        .properties
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["SettingsType", "SourceType", "SettingsObject"]);
    assert_eq!(events[0].event.property("SettingsType"), Some("ServiceSettings"));
    assert_eq!(events[0].event.property("SourceType"), Some("RemoteSource"));
    assert_eq!(
        events[0].event.property("SettingsObject"),
        Some("ServiceSettings { name: \"api\", replicas: 3 }")
    );
}

/// The previous callback sees the same arguments once, before logging.
#[test]
fn enriches_existing_settings_callback() {
    let log = RecordingLog::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let observer = log.clone();
    let counter = calls.clone();
    let mut settings = ProviderSettings::new().with_settings_callback(move |value, source| {
        let value = value.expect("value");
        assert_eq!(value.as_any().downcast_ref::<i32>(), Some(&42));
        assert!(source.is_some());
        assert!(observer.is_empty(), "previous callback must run before logging");
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    settings.with_settings_logging(log.as_log(), None);

    settings
        .report_settings(Some(&42_i32), Some(&TestSource))
        .expect("callback");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let events = log.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.level, LogLevel::Info);
}

/// Absent value and source are reported with the null type name.
#[test]
fn absent_value_and_source_use_null_type() {
    let log = RecordingLog::new();
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(log.as_log(), None);

    settings.report_settings(None, None).expect("callback");

    let events = log.events();
    assert_eq!(events[0].event.property("SettingsType"), Some(NULL_TYPE_NAME));
    assert_eq!(events[0].event.property("SourceType"), Some(NULL_TYPE_NAME));
    assert_eq!(events[0].event.property("SettingsObject"), Some("<null>"));
}

/// Print settings are passed through to the renderer.
#[test]
fn print_settings_control_rendering() {
    let log = RecordingLog::new();
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(
        log.as_log(),
        Some(PrintSettings::compact().with_max_length(8)),
    );

    let value = ServiceSettings {
        name: "api".to_string(),
        replicas: 3,
    };
    settings
        .report_settings(Some(&value), None)
        .expect("callback");

    assert_eq!(
        log.events()[0].event.property("SettingsObject"),
        Some("ServiceS...")
    );
}

#[test]
fn applying_twice_logs_twice() {
    let log = RecordingLog::new();
    let mut settings = ProviderSettings::new();
    settings
        .with_settings_logging(log.as_log(), None)
        .with_settings_logging(log.as_log(), None);

    settings
        .report_settings(Some(&1_u8), Some(&TestSource))
        .expect("callback");
    assert_eq!(log.len(), 2);
}

#[test]
fn disabled_info_level_skips_event() {
    let log = RecordingLog::with_min_level(LogLevel::Warn);
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(log.as_log(), None);

    settings
        .report_settings(Some(&1_u8), Some(&TestSource))
        .expect("callback");
    assert!(log.is_empty());
}

/// An absent lazy log fails only the logging step; the previous callback still runs.
#[test]
fn lazy_absent_log_fails_after_previous_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let mut settings = ProviderSettings::new().with_settings_callback(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    settings.with_settings_logging(LogSource::lazy(|| None), None);

    let err = settings
        .report_settings(Some(&1_u8), None)
        .expect_err("missing log");
    assert!(matches!(err, CallbackError::InvalidArgument("log")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn log_failure_propagates_to_caller() {
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(LogSource::direct(FailingLog), None);

    let err = settings
        .report_settings(Some(&1_u8), None)
        .expect_err("log failure");
    assert!(matches!(err, CallbackError::Log(_)));
}

#[test]
fn checked_install_rejects_absent_arguments() {
    let log = RecordingLog::new();
    let err = try_with_settings_logging(None, Some(log.as_log().into()), None).unwrap_err();
    assert!(matches!(err, LoggingError::InvalidArgument("settings")));

    let mut settings = ProviderSettings::new();
    let err = try_with_settings_logging(Some(&mut settings), None, None).unwrap_err();
    assert!(matches!(err, LoggingError::InvalidArgument("log")));
    assert!(settings.settings_callback.is_none());
}

/// Both hooks are independent and can share one settings object.
#[test]
fn error_and_settings_hooks_compose() {
    let log = RecordingLog::new();
    let mut settings = ProviderSettings::new();
    settings
        .with_error_logging(log.as_log())
        .with_settings_logging(log.as_log(), None);

    settings
        .report_settings(Some(&"value"), Some(&TestSource))
        .expect("settings");
    settings
        .report_error(&confhook_rs_test_utils::test_error("boom"))
        .expect("error");

    let levels = log
        .events()
        .iter()
        .map(|recorded| recorded.event.level)
        .collect::<Vec<_>>();
    assert_eq!(levels, vec![LogLevel::Info, LogLevel::Error]);
}

/// A lazy provider is consulted on every invocation, so the sink can change.
#[test]
fn lazy_log_is_resolved_per_invocation() {
    let first = RecordingLog::new();
    let second = RecordingLog::new();
    let current: Arc<Mutex<Arc<dyn Log>>> = Arc::new(Mutex::new(first.as_log()));

    let slot = current.clone();
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(LogSource::lazy(move || Some(slot.lock().clone())), None);

    settings
        .report_settings(Some(&1_u8), Some(&TestSource))
        .expect("first");
    *current.lock() = second.as_log();
    settings
        .report_settings(Some(&2_u8), Some(&TestSource))
        .expect("second");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first.events()[0].event.property("SettingsObject"), Some("1"));
    assert_eq!(second.events()[0].event.property("SettingsObject"), Some("2"));
}

/// New values can be reported from several threads with the hook installed.
#[test]
fn hook_can_fire_from_other_threads() {
    let log = RecordingLog::new();
    let mut settings = ProviderSettings::new();
    settings.with_settings_logging(log.as_log(), Some(PrintSettings::compact()));

    let shared = Arc::new(settings);
    let handles = (0..4_u32)
        .map(|idx| {
            let settings = shared.clone();
            std::thread::spawn(move || {
                settings
                    .report_settings(Some(&idx), Some(&TestSource))
                    .expect("callback");
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().expect("thread");
    }

    let mut rendered = log
        .events()
        .iter()
        .filter_map(|recorded| recorded.event.property("SettingsObject").map(str::to_string))
        .collect::<Vec<_>>();
    rendered.sort();
    assert_eq!(rendered, vec!["0", "1", "2", "3"]);
}
