use confhook_rs_abstractions::{ConfigSource, SharedError};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct TestSource;

impl ConfigSource for TestSource {}

/// Build a shareable error with the given message.
pub fn test_error(message: &str) -> SharedError {
    Arc::new(std::io::Error::other(message.to_string()))
}
