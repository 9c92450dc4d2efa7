// ! Logger capability for client instrumentation
// !
// ! Module defines the leveled logging capability that callers inject into
// ! the client builder, plus two ready-made implementations: one forwarding
// ! to `tracing` and one buffering entries in memory.

use std::fmt;
use std::sync::Mutex;

/// Severity level for log entries emitted by client instrumentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Verbose diagnostic detail (request/response envelopes)
    Debug,
    /// Informational lifecycle messages
    Info,
    /// Potential issues that don't fail the call
    Warn,
    /// Failures (SOAP faults, transport errors)
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Leveled logging capability accepted by [`with_log`].
///
/// Implementations receive entries from the [`LogPlugin`] wired onto a built
/// client. The trait is object-safe; clients hold loggers as
/// `Arc<dyn Logger>`, so one logger instance can back any number of built
/// clients.
///
/// [`with_log`]: crate::client::SforceClientBuilder::with_log
/// [`LogPlugin`]: crate::plugin::LogPlugin
pub trait Logger: Send + Sync {
    /// Record a message at the given level
    fn log(&self, level: LogLevel, message: &str);

    /// Record a debug-level message
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Record an info-level message
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Record a warn-level message
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Record an error-level message
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Logger that forwards entries to the `tracing` ecosystem.
///
/// The default choice for applications that already run a tracing
/// subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing-backed logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "sforce_soap", "{message}"),
            LogLevel::Info => tracing::info!(target: "sforce_soap", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "sforce_soap", "{message}"),
            LogLevel::Error => tracing::error!(target: "sforce_soap", "{message}"),
        }
    }
}

/// Logger that buffers entries in memory.
///
/// Useful in tests and anywhere entries should be inspected after the fact
/// rather than emitted immediately.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    /// Create a new empty buffering logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries in emission order
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().expect("logger mutex poisoned").clone()
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.lock().expect("logger mutex poisoned").len()
    }

    /// True if no entries have been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded entries
    pub fn clear(&self) {
        self.entries.lock().expect("logger mutex poisoned").clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .expect("logger mutex poisoned")
            .push((level, message.to_string()));
    }
}
