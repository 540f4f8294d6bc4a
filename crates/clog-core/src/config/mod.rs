//! Logger configuration
//!
//! A [`LoggerConfig`] describes the full runtime state of a logger: the five
//! enable flags, the optional log file, the color mode and whether writes are
//! serialized. It can be built in code or loaded from a YAML/JSON file; the
//! logger never reads configuration on its own.

mod file;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::ColorMode;
use crate::types::Severity;

pub use file::ConfigFormat;

/// Serializable logger settings
///
/// Missing fields take the logger defaults (Error and Warning on, everything
/// else off, no file, automatic color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub error: bool,
    pub warning: bool,
    pub info: bool,
    pub success: bool,
    pub debug: bool,
    /// Log file to mirror output into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Console color mode
    pub color: ColorMode,
    /// Hold one lock across console and file writes
    pub serialize_writes: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            error: Severity::Error.enabled_by_default(),
            warning: Severity::Warning.enabled_by_default(),
            info: Severity::Info.enabled_by_default(),
            success: Severity::Success.enabled_by_default(),
            debug: Severity::Debug.enabled_by_default(),
            log_file: None,
            color: ColorMode::default(),
            serialize_writes: false,
        }
    }
}

impl LoggerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Debug => self.debug,
        }
    }

    pub fn set_enabled(&mut self, severity: Severity, enabled: bool) {
        let flag = match severity {
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Info => &mut self.info,
            Severity::Success => &mut self.success,
            Severity::Debug => &mut self.debug,
        };
        *flag = enabled;
    }

    /// Enable or disable one severity
    pub fn with_severity(mut self, severity: Severity, enabled: bool) -> Self {
        self.set_enabled(severity, enabled);
        self
    }

    /// Enable every severity
    pub fn with_all_enabled(mut self) -> Self {
        for severity in Severity::ALL {
            self.set_enabled(severity, true);
        }
        self
    }

    /// Set the log file path
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Set the color mode
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Serialize console and file writes
    pub fn with_serialized_writes(mut self, serialize: bool) -> Self {
        self.serialize_writes = serialize;
        self
    }
}
