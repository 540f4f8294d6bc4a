//! Logger trait definition

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::types::Severity;

/// Logger abstraction
///
/// Implementations:
/// - `ConsoleLogger`: colored console output plus an optional log file
/// - `NoOpLogger`: Silent logger for testing
pub trait Logger: Send + Sync {
    /// Whether calls at `severity` produce any output
    fn is_enabled(&self, severity: Severity) -> bool;

    /// Log `values`, space-joined, at `severity`
    fn log(&self, severity: Severity, values: &[&dyn Display]);

    /// Log an error message
    fn error(&self, values: &[&dyn Display]) {
        self.log(Severity::Error, values);
    }

    /// Log a warning message
    fn warning(&self, values: &[&dyn Display]) {
        self.log(Severity::Warning, values);
    }

    /// Log an info message
    fn info(&self, values: &[&dyn Display]) {
        self.log(Severity::Info, values);
    }

    /// Log a success message
    fn success(&self, values: &[&dyn Display]) {
        self.log(Severity::Success, values);
    }

    /// Log a debug message
    fn debug(&self, values: &[&dyn Display]) {
        self.log(Severity::Debug, values);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for error values and format arguments
pub trait LoggerExt: Logger {
    /// Log `e` at Error severity; does nothing for `None`
    fn err<E: Display + ?Sized>(&self, e: Option<&E>) {
        if let Some(e) = e {
            if self.is_enabled(Severity::Error) {
                self.log(Severity::Error, &[&e]);
            }
        }
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, &[&args]);
    }

    /// Log a warning message with format arguments
    fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, &[&args]);
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, &[&args]);
    }

    /// Log a success message with format arguments
    fn success_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Success, &[&args]);
    }

    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, &[&args]);
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Log any number of values at Error severity on a specific logger
///
/// ```
/// use clog_core::{log_error, NoOpLogger};
///
/// let logger = NoOpLogger::new();
/// log_error!(logger, "connection lost after", 3, "retries");
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::logging::Logger as _;
        ($logger).error(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::logging::Logger as _;
        ($logger).warning(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::logging::Logger as _;
        ($logger).info(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::logging::Logger as _;
        ($logger).success(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::logging::Logger as _;
        ($logger).debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}
