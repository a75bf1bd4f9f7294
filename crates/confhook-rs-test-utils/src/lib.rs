//! Test helpers shared across confhook crates.

pub mod log;
pub mod source;

pub use log::{FailingLog, RecordedEvent, RecordingLog};
pub use source::{TestSource, test_error};
