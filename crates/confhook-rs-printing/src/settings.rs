//! Options controlling how settings values are rendered.

use serde::{Deserialize, Serialize};

/// Layout of a rendered value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintFormat {
    /// Multi-line, indented rendering.
    #[default]
    Pretty,
    /// Single-line rendering.
    Compact,
}

/// Rendering options for [`ConfigurationPrinter`](crate::ConfigurationPrinter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintSettings {
    /// Output layout.
    pub format: PrintFormat,
    /// Maximum number of characters before the output is cut and suffixed
    /// with `...`.
    pub max_length: Option<usize>,
    /// Text used for an absent value.
    pub null_text: String,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            format: PrintFormat::Pretty,
            max_length: None,
            null_text: "<null>".to_string(),
        }
    }
}

impl PrintSettings {
    pub fn compact() -> Self {
        Self {
            format: PrintFormat::Compact,
            ..Self::default()
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}
