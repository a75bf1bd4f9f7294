//! Log event model and message template rendering.

use crate::LogLevel;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::sync::Arc;

/// Error value attached to log events and configuration callbacks.
///
/// Shared so the same error instance can be forwarded to several consumers.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// A single structured log entry.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Event severity.
    pub level: LogLevel,
    /// Time the event was created.
    pub timestamp: DateTime<Utc>,
    /// Message with `{Name}` placeholders.
    pub message_template: String,
    /// Named template arguments, in the order they were supplied.
    pub properties: Vec<(String, String)>,
    /// Error associated with the event, if any.
    pub error: Option<SharedError>,
}

impl LogEvent {
    /// Create an event stamped with the current time.
    pub fn new(level: LogLevel, message_template: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            message_template: message_template.into(),
            properties: Vec::new(),
            error: None,
        }
    }

    /// Attach an error to the event.
    pub fn with_error(mut self, error: SharedError) -> Self {
        self.error = Some(error);
        self
    }

    /// Append a named template argument.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Look up a property by name; the first match wins.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render the template, substituting `{Name}` placeholders.
    ///
    /// Unknown placeholders are kept verbatim and `{{` / `}}` produce literal
    /// braces.
    pub fn render_message(&self) -> String {
        let template = self.message_template.as_str();
        let mut rendered = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find(['{', '}']) {
            rendered.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") || tail.starts_with("}}") {
                rendered.push_str(&tail[..1]);
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with('}') {
                rendered.push('}');
                rest = &tail[1..];
                continue;
            }

            match tail.find('}') {
                Some(end) => {
                    let name = &tail[1..end];
                    match self.property(name) {
                        Some(value) => rendered.push_str(value),
                        None => rendered.push_str(&tail[..=end]),
                    }
                    rest = &tail[end + 1..];
                }
                None => {
                    rendered.push_str(tail);
                    rest = "";
                }
            }
        }

        rendered.push_str(rest);
        rendered
    }
}
