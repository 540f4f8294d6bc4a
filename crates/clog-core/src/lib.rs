//! Clog Core
//!
//! A small leveled logger. Each call writes one timestamped line to the
//! console, colored by severity, and mirrors a plain copy into a log file
//! when one is configured. Every severity (Error, Warning, Info, Success,
//! Debug) has its own enable flag that can be flipped at runtime.
//!
//! ## Owned logger
//!
//! ```rust
//! use clog_core::{ConsoleLogger, Logger, LoggerExt, List};
//!
//! let logger = ConsoleLogger::new();
//! logger.set_enable_success(true);
//!
//! logger.success(&[&"synced", &List(&["users", "groups"])]);
//! logger.err(Some(&std::io::Error::other("connection reset")));
//! ```
//!
//! ## Process-wide logger
//!
//! ```rust
//! clog_core::global::set_enable_info(true);
//! clog_core::info!("started with", 4, "workers");
//! clog_core::warning!("config missing, using defaults");
//! ```
//!
//! Console lines look like `[19.10.26 14:03:07.042] Warning: disk at 91%`
//! with ANSI colors; file lines are the same text without colors.

pub mod types;
pub mod logging;
pub mod config;
pub mod global;
mod error;

// Re-export commonly used types
pub use types::{format_message, or_nil, List, Nil, OrNil, Severity};

pub use logging::{
    BoxedLogger, ColorMode, ConsoleLogger, LogFile, Logger, LoggerExt, MemoryWriter,
    NoOpLogger, RenderedLine, SharedLogger,
};

pub use config::{ConfigFormat, LoggerConfig};

pub use error::{LogError, LogResult};
