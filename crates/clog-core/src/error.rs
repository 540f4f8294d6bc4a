//! Logger error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring a logger
///
/// Logging calls themselves never fail; only opening the log file and
/// loading configuration report errors.
#[derive(Error, Debug)]
pub enum LogError {
    /// The log file could not be opened for appending
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be written
    #[error("failed to write config {path}: {source}")]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed
    #[error("failed to parse config {path}: {message}")]
    ParseConfig { path: PathBuf, message: String },

    /// The configuration file extension is not one we can parse
    #[error("unsupported config format: {0}")]
    UnsupportedConfigFormat(PathBuf),

    /// A severity name did not match any known severity
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}

impl LogError {
    /// Create an open-log-file error
    pub fn open_log_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenLogFile {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a config file
    pub fn parse_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseConfig {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The underlying I/O error, if this error wraps one
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::OpenLogFile { source, .. }
            | Self::ReadConfig { source, .. }
            | Self::WriteConfig { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
