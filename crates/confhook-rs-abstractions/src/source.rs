//! Configuration source marker.

/// Where a configuration value came from.
///
/// Hooks never read a source's contents; they only report its type.
pub trait ConfigSource: Send + Sync {
    /// Fully qualified name of the implementing type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
