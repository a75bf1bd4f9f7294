//! Textual rendering of settings values for logs.

mod printer;
mod settings;

/// Value renderer.
pub use printer::ConfigurationPrinter;
/// Rendering options.
pub use settings::{PrintFormat, PrintSettings};
