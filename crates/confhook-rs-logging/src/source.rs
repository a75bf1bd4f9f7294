//! Log handles supplied directly or resolved on every callback.

use confhook_rs_abstractions::CallbackError;
use confhook_rs_log::Log;
use std::fmt;
use std::sync::Arc;

/// Zero-argument function yielding the log to write to, if one is available.
pub type LogProvider = Arc<dyn Fn() -> Option<Arc<dyn Log>> + Send + Sync>;

/// Where hooks obtain their log handle.
#[derive(Clone)]
pub enum LogSource {
    /// A handle bound when the hook is installed.
    Direct(Arc<dyn Log>),
    /// A provider called each time a hook fires. Results are not cached, so
    /// the sink may change between invocations.
    Lazy(LogProvider),
}

impl LogSource {
    pub fn direct(log: impl Log + 'static) -> Self {
        Self::Direct(Arc::new(log))
    }

    pub fn lazy<F>(provider: F) -> Self
    where
        F: Fn() -> Option<Arc<dyn Log>> + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(provider))
    }

    /// Obtain the current log handle.
    pub fn resolve(&self) -> Result<Arc<dyn Log>, CallbackError> {
        match self {
            Self::Direct(log) => Ok(log.clone()),
            Self::Lazy(provider) => provider().ok_or(CallbackError::InvalidArgument("log")),
        }
    }
}

impl From<Arc<dyn Log>> for LogSource {
    fn from(log: Arc<dyn Log>) -> Self {
        Self::Direct(log)
    }
}

impl fmt::Debug for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("LogSource::Direct"),
            Self::Lazy(_) => f.write_str("LogSource::Lazy"),
        }
    }
}
