//! No-op logger implementation

use std::fmt::Display;

use super::traits::Logger;
use crate::types::Severity;

/// A logger that does nothing
///
/// Every severity reports disabled. Useful for testing or when logging is
/// not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn is_enabled(&self, _severity: Severity) -> bool {
        false
    }

    fn log(&self, _severity: Severity, _values: &[&dyn Display]) {}
}
