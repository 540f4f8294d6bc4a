//! Severity levels and their presentation

use std::fmt;
use std::str::FromStr;

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// A logging severity
///
/// Unlike most level schemes these are not ordered: each severity has its own
/// enable flag and is toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
    Debug,
}

impl Severity {
    /// All severities, in declaration order
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Success,
        Severity::Debug,
    ];

    /// Label written before the message, on both the console and the file
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR:",
            Severity::Warning => "Warning:",
            Severity::Info => "Info:",
            Severity::Success => "Success:",
            Severity::Debug => "Debug:",
        }
    }

    /// Console color of the label. `None` means the label is printed plain.
    pub fn label_color(&self) -> Option<Color> {
        match self {
            Severity::Error => Some(Color::Red),
            Severity::Warning => Some(Color::Yellow),
            Severity::Info => None,
            Severity::Success => Some(Color::Green),
            Severity::Debug => Some(Color::Blue),
        }
    }

    /// Console color of the message text
    pub fn message_color(&self) -> Option<Color> {
        match self {
            Severity::Error => Some(Color::BrightRed),
            Severity::Warning => Some(Color::BrightYellow),
            Severity::Info => None,
            Severity::Success => Some(Color::BrightGreen),
            Severity::Debug => Some(Color::Cyan),
        }
    }

    /// Whether the severity is enabled on a freshly created logger
    pub fn enabled_by_default(&self) -> bool {
        matches!(self, Severity::Error | Severity::Warning)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Debug => "debug",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "debug" => Ok(Severity::Debug),
            _ => Err(LogError::UnknownSeverity(s.to_string())),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}
