//! Process-wide default logger
//!
//! A lazily created [`ConsoleLogger`] writing to stdout, plus free functions
//! and macros that forward to it. Code that wants isolated state (tests,
//! libraries) should own a `ConsoleLogger` instead.
//!
//! ```no_run
//! use clog_core::global;
//!
//! global::set_enable_debug(true);
//! global::set_log_file("app.log")?;
//!
//! clog_core::debug!("cache warmed in", 42, "ms");
//! clog_core::error!("upstream unreachable:", "10.0.0.7");
//! # Ok::<(), clog_core::LogError>(())
//! ```

use std::fmt::Display;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::logging::{ColorMode, ConsoleLogger, Logger, LoggerExt};
use crate::types::Severity;

/// Global logger instance
static DEFAULT: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// The process-wide logger
pub fn default_logger() -> &'static ConsoleLogger {
    &DEFAULT
}

/// Route the `log` facade into the default logger
///
/// Fails if another `log` backend is already installed.
pub fn init_log_facade() -> Result<(), log::SetLoggerError> {
    log::set_logger(&*DEFAULT)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub fn set_enable_error(enabled: bool) {
    DEFAULT.set_enable_error(enabled);
}

pub fn set_enable_warning(enabled: bool) {
    DEFAULT.set_enable_warning(enabled);
}

pub fn set_enable_info(enabled: bool) {
    DEFAULT.set_enable_info(enabled);
}

pub fn set_enable_success(enabled: bool) {
    DEFAULT.set_enable_success(enabled);
}

pub fn set_enable_debug(enabled: bool) {
    DEFAULT.set_enable_debug(enabled);
}

pub fn set_enable_all() {
    DEFAULT.set_enable_all();
}

pub fn set_disable_all() {
    DEFAULT.set_disable_all();
}

pub fn is_enabled(severity: Severity) -> bool {
    DEFAULT.is_enabled(severity)
}

/// Mirror output into `path`; an empty path closes the current file
pub fn set_log_file(path: impl AsRef<Path>) -> LogResult<()> {
    DEFAULT.set_log_file(path)
}

pub fn close_log_file() {
    DEFAULT.close_log_file();
}

pub fn set_color_mode(mode: ColorMode) {
    DEFAULT.set_color_mode(mode);
}

pub fn apply_config(config: &LoggerConfig) -> LogResult<()> {
    DEFAULT.apply_config(config)
}

/// Log `e` at Error severity; does nothing for `None`
pub fn err<E: Display + ?Sized>(e: Option<&E>) {
    DEFAULT.err(e);
}

pub fn log(severity: Severity, values: &[&dyn Display]) {
    Logger::log(&*DEFAULT, severity, values);
}

pub fn error(values: &[&dyn Display]) {
    log(Severity::Error, values);
}

pub fn warning(values: &[&dyn Display]) {
    log(Severity::Warning, values);
}

pub fn info(values: &[&dyn Display]) {
    log(Severity::Info, values);
}

pub fn success(values: &[&dyn Display]) {
    log(Severity::Success, values);
}

pub fn debug(values: &[&dyn Display]) {
    log(Severity::Debug, values);
}

/// Log any number of values at Error severity on the default logger
#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {
        $crate::global::log($crate::Severity::Error, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log any number of values at Warning severity on the default logger
#[macro_export]
macro_rules! warning {
    ($($value:expr),* $(,)?) => {
        $crate::global::log($crate::Severity::Warning, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log any number of values at Info severity on the default logger
#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {
        $crate::global::log($crate::Severity::Info, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log any number of values at Success severity on the default logger
#[macro_export]
macro_rules! success {
    ($($value:expr),* $(,)?) => {
        $crate::global::log($crate::Severity::Success, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log any number of values at Debug severity on the default logger
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::global::log($crate::Severity::Debug, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
