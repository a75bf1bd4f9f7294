//! Renders settings values into display strings.

use crate::{PrintFormat, PrintSettings};
use confhook_rs_abstractions::SettingsValue;

/// Suffix appended to truncated output.
const TRUNCATION_MARKER: &str = "...";

/// Converts settings values into human-readable text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationPrinter;

impl ConfigurationPrinter {
    /// Render `value` using `settings`, or the defaults when none are given.
    pub fn print(value: Option<&dyn SettingsValue>, settings: Option<&PrintSettings>) -> String {
        let defaults;
        let settings = match settings {
            Some(settings) => settings,
            None => {
                defaults = PrintSettings::default();
                &defaults
            }
        };

        let rendered = match value {
            None => settings.null_text.clone(),
            Some(value) => match settings.format {
                PrintFormat::Pretty => format!("{value:#?}"),
                PrintFormat::Compact => format!("{value:?}"),
            },
        };

        match settings.max_length {
            Some(max_length) => truncate(rendered, max_length),
            None => rendered,
        }
    }
}

fn truncate(rendered: String, max_length: usize) -> String {
    match rendered.char_indices().nth(max_length) {
        Some((cut, _)) => {
            let mut truncated = rendered[..cut].to_string();
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Endpoint {
        host: String,
        port: u16,
    }

    fn endpoint() -> Endpoint {
        Endpoint {
            host: "localhost".to_string(),
            port: 8080,
        }
    }

    #[test]
    fn default_settings_render_pretty() {
        let value = endpoint();
        assert_eq!(
            ConfigurationPrinter::print(Some(&value), None),
            "Endpoint {\n    host: \"localhost\",\n    port: 8080,\n}"
        );
    }

    #[test]
    fn compact_renders_single_line() {
        let value = endpoint();
        assert_eq!(
            ConfigurationPrinter::print(Some(&value), Some(&PrintSettings::compact())),
            "Endpoint { host: \"localhost\", port: 8080 }"
        );
    }

    #[test]
    fn absent_value_renders_null_text() {
        assert_eq!(ConfigurationPrinter::print(None, None), "<null>");
        let settings = PrintSettings {
            null_text: "none".to_string(),
            ..PrintSettings::default()
        };
        assert_eq!(ConfigurationPrinter::print(None, Some(&settings)), "none");
    }

    #[test]
    fn truncates_on_character_boundaries() {
        let value = "héllo wörld".to_string();
        let settings = PrintSettings::compact().with_max_length(4);
        assert_eq!(
            ConfigurationPrinter::print(Some(&value), Some(&settings)),
            "\"hél..."
        );
    }

    #[test]
    fn short_output_is_not_truncated() {
        let settings = PrintSettings::compact().with_max_length(10);
        assert_eq!(ConfigurationPrinter::print(Some(&42_u32), Some(&settings)), "42");
    }
}
