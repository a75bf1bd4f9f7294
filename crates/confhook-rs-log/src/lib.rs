//! Log handle abstraction used by configuration hooks.
//!
//! A [`Log`] accepts leveled events carrying a message template, ordered
//! named properties and an optional error. Handles can be specialised to a
//! named origin with [`Log::for_context`].

mod error;
mod event;
mod facade;
mod handle;
mod level;
mod silent;

/// Errors raised while writing log events.
pub use error::LogError;
/// Log event model and shared error handle.
pub use event::{LogEvent, SharedError};
/// Bridge onto the `log` crate facade.
pub use facade::FacadeLog;
/// Log handle trait and leveled convenience methods.
pub use handle::{Log, LogExt};
/// Severity levels.
pub use level::LogLevel;
/// Log that drops every event.
pub use silent::SilentLog;
