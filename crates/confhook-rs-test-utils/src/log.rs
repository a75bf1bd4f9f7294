use confhook_rs_log::{Log, LogError, LogEvent, LogLevel};
use parking_lot::Mutex;
use std::sync::Arc;

/// Event captured by [`RecordingLog`] together with the context it was
/// written under.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub context: Option<String>,
    pub event: LogEvent,
}

/// Log that keeps every event in memory. Clones and contextual handles share
/// the same buffer.
#[derive(Clone)]
pub struct RecordingLog {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
    context: Option<String>,
    min_level: LogLevel,
}

impl Default for RecordingLog {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::with_min_level(LogLevel::Debug)
    }

    pub fn with_min_level(min_level: LogLevel) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            context: None,
            min_level,
        }
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn as_log(&self) -> Arc<dyn Log> {
        Arc::new(self.clone())
    }
}

impl Log for RecordingLog {
    fn log(&self, event: LogEvent) -> Result<(), LogError> {
        self.events.lock().push(RecordedEvent {
            context: self.context.clone(),
            event,
        });
        Ok(())
    }

    fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn for_context(&self, context: &str) -> Arc<dyn Log> {
        Arc::new(Self {
            events: self.events.clone(),
            context: Some(context.to_string()),
            min_level: self.min_level,
        })
    }
}

/// Log whose writes always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingLog;

impl Log for FailingLog {
    fn log(&self, _event: LogEvent) -> Result<(), LogError> {
        Err(LogError::WriteFailed("sink rejected event".to_string()))
    }

    fn is_enabled_for(&self, _level: LogLevel) -> bool {
        true
    }

    fn for_context(&self, _context: &str) -> Arc<dyn Log> {
        Arc::new(FailingLog)
    }
}
