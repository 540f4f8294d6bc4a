//! `log` crate backend
//!
//! Lets a [`ConsoleLogger`] receive records from `log::error!`, `log::warn!`
//! and friends. Levels map onto severities as Error -> Error, Warn -> Warning,
//! Info -> Info, Debug and Trace -> Debug; a record passes when its mapped
//! severity is enabled.

use std::fmt::Display;

use log::{Metadata, Record};

use super::console::ConsoleLogger;
use super::traits::Logger;
use crate::types::Severity;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let severity = Severity::from(record.level());
        Logger::log(self, severity, &[record.args() as &dyn Display]);
    }

    fn flush(&self) {
        ConsoleLogger::flush(self);
    }
}
