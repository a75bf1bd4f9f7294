//! Open-typed settings values produced by configuration providers.

use std::any::Any;
use std::fmt::Debug;

/// A settings value of any concrete type.
///
/// Implemented for every `Any + Debug + Send + Sync` type so providers can
/// hand arbitrary payloads to callbacks while the runtime type stays
/// observable.
pub trait SettingsValue: Any + Debug + Send + Sync {
    /// Fully qualified name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl<T> SettingsValue for T
where
    T: Any + Debug + Send + Sync,
{
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Strip module paths from every path in a type name, keeping generic
/// structure: `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                short.truncate(segment_start);
            }
            '<' | '>' | ',' | ';' | '(' | ')' | '[' | ']' | '&' | '*' | ' ' => {
                short.push(ch);
                segment_start = short.len();
            }
            _ => short.push(ch),
        }
    }

    short
}
