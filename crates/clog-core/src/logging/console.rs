//! Console logger implementation
//!
//! Writes one colored line per enabled call to the console (stdout unless a
//! writer is injected) and mirrors a plain copy into the log file when one is
//! open.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};

use chrono::Local;
use parking_lot::Mutex;

use super::file_sink::LogFile;
use super::style::{paint_into, ColorMode, TIMESTAMP_COLOR};
use super::traits::Logger;
use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::types::{format_message, Severity};

/// Timestamp layout: `DD.MM.YY HH:MM:SS.mmm`
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%y %H:%M:%S%.3f";

/// The two renderings of one log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Line for the console, possibly with ANSI codes
    pub console: String,
    /// Line for the log file, never colored
    pub file: String,
}

/// Build the console and file lines for one message
pub fn render_line(
    severity: Severity,
    timestamp: &str,
    message: &str,
    colorize: bool,
) -> RenderedLine {
    let label = severity.label();

    let mut console = String::with_capacity(timestamp.len() + label.len() + message.len() + 32);
    console.push('[');
    paint_into(&mut console, timestamp, Some(TIMESTAMP_COLOR), colorize);
    console.push_str("] ");
    paint_into(&mut console, label, severity.label_color(), colorize);
    console.push(' ');
    paint_into(&mut console, message, severity.message_color(), colorize);
    console.push('\n');

    let file = format!("[{timestamp}] {label} {message}\n");

    RenderedLine { console, file }
}

/// Leveled logger writing to the console and an optional log file
///
/// Every severity has its own flag; Error and Warning start enabled, the
/// rest start disabled.
///
/// # Example
///
/// ```
/// use clog_core::{ColorMode, ConsoleLogger, Logger, MemoryWriter};
///
/// let out = MemoryWriter::new();
/// let logger = ConsoleLogger::with_writer(out.clone());
/// logger.set_color_mode(ColorMode::Never);
///
/// logger.info(&[&"hidden"]);
/// logger.set_enable_info(true);
/// logger.info(&[&"listening on", &8080]);
///
/// assert!(out.contents().ends_with("] Info: listening on 8080\n"));
/// ```
pub struct ConsoleLogger {
    flags: [AtomicBool; 5],
    color_mode: AtomicU8,
    serialize_writes: AtomicBool,
    console: Mutex<Box<dyn Write + Send>>,
    file: Mutex<Option<LogFile>>,
    emit_lock: Mutex<()>,
    write_failures: AtomicU64,
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled: Vec<_> = Severity::ALL
            .into_iter()
            .filter(|s| self.is_enabled(*s))
            .collect();
        f.debug_struct("ConsoleLogger")
            .field("enabled", &enabled)
            .field("color_mode", &self.color_mode())
            .field("serialize_writes", &self.serialize_writes())
            .field("log_file", &self.log_file_path())
            .field("write_failures", &self.write_failures())
            .finish()
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a logger writing to stdout
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a logger writing console lines to `writer`
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            flags: Severity::ALL.map(|s| AtomicBool::new(s.enabled_by_default())),
            color_mode: AtomicU8::new(ColorMode::default().to_u8()),
            serialize_writes: AtomicBool::new(false),
            console: Mutex::new(Box::new(writer)),
            file: Mutex::new(None),
            emit_lock: Mutex::new(()),
            write_failures: AtomicU64::new(0),
        }
    }

    /// Create a stdout logger configured from `config`
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        let logger = Self::new();
        logger.apply_config(config)?;
        Ok(logger)
    }

    /// Bring the logger in line with `config`
    ///
    /// The log file is switched first; if it cannot be opened nothing else
    /// changes. A config without a log file closes the current one.
    pub fn apply_config(&self, config: &LoggerConfig) -> LogResult<()> {
        match &config.log_file {
            Some(path) => self.set_log_file(path)?,
            None => self.close_log_file(),
        }
        for severity in Severity::ALL {
            self.set_enabled(severity, config.is_enabled(severity));
        }
        self.set_color_mode(config.color);
        self.set_serialize_writes(config.serialize_writes);
        Ok(())
    }

    /// Snapshot of the current settings
    pub fn config(&self) -> LoggerConfig {
        let mut config = LoggerConfig {
            log_file: self.log_file_path(),
            color: self.color_mode(),
            serialize_writes: self.serialize_writes(),
            ..LoggerConfig::default()
        };
        for severity in Severity::ALL {
            config.set_enabled(severity, self.is_enabled(severity));
        }
        config
    }

    pub fn set_enabled(&self, severity: Severity, enabled: bool) {
        self.flags[severity.index()].store(enabled, Ordering::Relaxed);
    }

    pub fn set_enable_error(&self, enabled: bool) {
        self.set_enabled(Severity::Error, enabled);
    }

    pub fn set_enable_warning(&self, enabled: bool) {
        self.set_enabled(Severity::Warning, enabled);
    }

    pub fn set_enable_info(&self, enabled: bool) {
        self.set_enabled(Severity::Info, enabled);
    }

    pub fn set_enable_success(&self, enabled: bool) {
        self.set_enabled(Severity::Success, enabled);
    }

    pub fn set_enable_debug(&self, enabled: bool) {
        self.set_enabled(Severity::Debug, enabled);
    }

    /// Enable every severity
    pub fn set_enable_all(&self) {
        for severity in Severity::ALL {
            self.set_enabled(severity, true);
        }
    }

    /// Disable every severity
    pub fn set_disable_all(&self) {
        for severity in Severity::ALL {
            self.set_enabled(severity, false);
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_u8(self.color_mode.load(Ordering::Relaxed))
    }

    pub fn set_color_mode(&self, mode: ColorMode) {
        self.color_mode.store(mode.to_u8(), Ordering::Relaxed);
    }

    pub fn serialize_writes(&self) -> bool {
        self.serialize_writes.load(Ordering::Relaxed)
    }

    /// Hold one lock across the console and file write of each line, so
    /// both sinks see lines from concurrent callers in the same order
    pub fn set_serialize_writes(&self, serialize: bool) {
        self.serialize_writes.store(serialize, Ordering::Relaxed);
    }

    /// Mirror output into the file at `path`
    ///
    /// An empty path closes the current file. Otherwise the file is opened
    /// for appending (created if missing) and replaces, and closes, the
    /// previous one. On failure the previous file stays in place.
    pub fn set_log_file(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            self.close_log_file();
            return Ok(());
        }

        let file = LogFile::open(path)?;
        let previous = self.file.lock().replace(file);
        drop(previous);
        Ok(())
    }

    /// Close the log file, if one is open
    pub fn close_log_file(&self) {
        let previous = self.file.lock().take();
        drop(previous);
    }

    pub fn has_log_file(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Path of the open log file
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.file.lock().as_ref().map(|f| f.path().to_path_buf())
    }

    /// Number of console or file writes that failed
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Flush the console writer
    pub fn flush(&self) {
        if self.console.lock().flush().is_err() {
            self.record_failure();
        }
    }

    fn emit(&self, line: &RenderedLine) {
        let _serialized = self.serialize_writes().then(|| self.emit_lock.lock());

        {
            let mut console = self.console.lock();
            let written = console
                .write_all(line.console.as_bytes())
                .and_then(|_| console.flush());
            if written.is_err() {
                self.record_failure();
            }
        }

        if let Some(file) = self.file.lock().as_mut() {
            if file.write_line(&line.file).is_err() {
                self.record_failure();
            }
        }
    }

    fn record_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }
}

impl Logger for ConsoleLogger {
    fn is_enabled(&self, severity: Severity) -> bool {
        self.flags[severity.index()].load(Ordering::Relaxed)
    }

    fn log(&self, severity: Severity, values: &[&dyn Display]) {
        if !self.is_enabled(severity) {
            return;
        }

        let message = format_message(values);
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = render_line(
            severity,
            &timestamp,
            &message,
            self.color_mode().should_colorize(),
        );
        self.emit(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::memory::MemoryWriter;
    use crate::logging::traits::LoggerExt;
    use crate::types::List;
    use chrono::NaiveDateTime;
    use std::fs;
    use std::sync::Arc;
    use std::thread;

    // "[" + "\x1b[32m" + 21-char timestamp + "\x1b[0m" + "] "
    const COLORED_PREFIX_LEN: usize = 33;

    fn colored_logger() -> (ConsoleLogger, MemoryWriter) {
        let out = MemoryWriter::new();
        let logger = ConsoleLogger::with_writer(out.clone());
        logger.set_color_mode(ColorMode::Always);
        logger.set_enable_all();
        (logger, out)
    }

    fn assert_timestamp(ts: &str) {
        assert_eq!(ts.len(), 21, "timestamp {ts:?}");
        assert!(
            NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).is_ok(),
            "timestamp {ts:?}"
        );
    }

    #[test]
    fn test_render_line_templates() {
        let ts = "19.10.26 14:03:07.042";
        let cases = [
            (Severity::Error, "\x1b[31mERROR:\x1b[0m \x1b[91mm\x1b[0m\n"),
            (Severity::Warning, "\x1b[33mWarning:\x1b[0m \x1b[93mm\x1b[0m\n"),
            (Severity::Info, "Info: m\n"),
            (Severity::Success, "\x1b[32mSuccess:\x1b[0m \x1b[92mm\x1b[0m\n"),
            (Severity::Debug, "\x1b[34mDebug:\x1b[0m \x1b[36mm\x1b[0m\n"),
        ];

        for (severity, tail) in cases {
            let line = render_line(severity, ts, "m", true);
            assert_eq!(
                line.console,
                format!("[\x1b[32m{ts}\x1b[0m] {tail}"),
                "{severity}"
            );
            assert_eq!(line.file, format!("[{ts}] {} m\n", severity.label()));
        }
    }

    #[test]
    fn test_render_line_without_color_matches_file_line() {
        for severity in Severity::ALL {
            let line = render_line(severity, "01.01.26 00:00:00.000", "plain", false);
            assert_eq!(line.console, line.file);
            assert!(!line.console.contains('\x1b'));
        }
    }

    #[test]
    fn test_defaults() {
        let logger = ConsoleLogger::with_writer(MemoryWriter::new());
        assert!(logger.is_enabled(Severity::Error));
        assert!(logger.is_enabled(Severity::Warning));
        assert!(!logger.is_enabled(Severity::Info));
        assert!(!logger.is_enabled(Severity::Success));
        assert!(!logger.is_enabled(Severity::Debug));
        assert!(!logger.has_log_file());
        assert_eq!(logger.color_mode(), ColorMode::Auto);
    }

    #[test]
    fn test_setters() {
        let logger = ConsoleLogger::with_writer(MemoryWriter::new());
        let setters: [(Severity, fn(&ConsoleLogger, bool)); 5] = [
            (Severity::Error, ConsoleLogger::set_enable_error),
            (Severity::Warning, ConsoleLogger::set_enable_warning),
            (Severity::Info, ConsoleLogger::set_enable_info),
            (Severity::Success, ConsoleLogger::set_enable_success),
            (Severity::Debug, ConsoleLogger::set_enable_debug),
        ];

        for (severity, setter) in setters {
            let before = logger.is_enabled(severity);
            setter(&logger, !before);
            assert_eq!(logger.is_enabled(severity), !before, "{severity}");
            setter(&logger, before);
            assert_eq!(logger.is_enabled(severity), before, "{severity}");
        }
    }

    #[test]
    fn test_enable_all_then_disable_all() {
        let logger = ConsoleLogger::with_writer(MemoryWriter::new());
        logger.set_enable_all();
        assert!(Severity::ALL.iter().all(|s| logger.is_enabled(*s)));
        logger.set_disable_all();
        assert!(Severity::ALL.iter().all(|s| !logger.is_enabled(*s)));

        // Last write wins per flag.
        logger.set_enable_debug(true);
        logger.set_enable_debug(false);
        logger.set_enable_info(true);
        assert!(!logger.is_enabled(Severity::Debug));
        assert!(logger.is_enabled(Severity::Info));
    }

    #[test]
    fn test_console_output_per_severity() {
        let (logger, out) = colored_logger();
        let cases = [
            (Severity::Error, "\x1b[31mERROR:\x1b[0m \x1b[91mTest error message\x1b[0m\n"),
            (Severity::Warning, "\x1b[33mWarning:\x1b[0m \x1b[93mTest error message\x1b[0m\n"),
            (Severity::Info, "Info: Test error message\n"),
            (Severity::Success, "\x1b[32mSuccess:\x1b[0m \x1b[92mTest error message\x1b[0m\n"),
            (Severity::Debug, "\x1b[34mDebug:\x1b[0m \x1b[36mTest error message\x1b[0m\n"),
        ];

        for (severity, expected) in cases {
            logger.log(severity, &[&"Test error message"]);
            let line = out.take();
            assert!(line.starts_with("[\x1b[32m"), "{line:?}");
            assert_timestamp(&line[6..27]);
            assert_eq!(&line[27..COLORED_PREFIX_LEN], "\x1b[0m] ");
            assert_eq!(&line[COLORED_PREFIX_LEN..], expected);
        }
    }

    #[test]
    fn test_disabled_severity_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let (logger, out) = colored_logger();
        logger.set_log_file(&path).unwrap();
        logger.set_disable_all();

        logger.error(&[&"e"]);
        logger.warning(&[&"w"]);
        logger.info(&[&"i"]);
        logger.success(&[&"s"]);
        logger.debug(&[&"d"]);

        assert!(out.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_disabled_severity_skips_formatting() {
        struct Exploding;
        impl Display for Exploding {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a disabled message");
            }
        }

        let (logger, out) = colored_logger();
        logger.set_enable_debug(false);
        logger.debug(&[&Exploding]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_line_is_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let (logger, out) = colored_logger();
        logger.set_log_file(&path).unwrap();

        logger.error(&[&"Test error message"]);

        assert!(out.contents().contains('\x1b'));
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains('\x1b'));
        assert_eq!(content.lines().count(), 1);

        let line = content.strip_suffix('\n').unwrap();
        assert!(line.starts_with('['));
        assert_timestamp(&line[1..22]);
        assert_eq!(&line[22..], "] ERROR: Test error message");
    }

    #[test]
    fn test_each_call_appends_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let (logger, _out) = colored_logger();
        logger.set_log_file(&path).unwrap();

        logger.warning(&[&"first"]);
        logger.success(&[&List(&["a", "b"])]);
        logger.info(&[&"count", &3]);

        let content = fs::read_to_string(&path).unwrap();
        let tails: Vec<_> = content.lines().map(|l| &l[24..]).collect();
        assert_eq!(tails, vec!["Warning: first", "Success: a b", "Info: count 3"]);
    }

    #[test]
    fn test_set_log_file_empty_path_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ConsoleLogger::with_writer(MemoryWriter::new());

        logger.set_log_file("").unwrap();
        assert!(!logger.has_log_file());

        logger.set_log_file(dir.path().join("app.log")).unwrap();
        assert!(logger.has_log_file());

        logger.set_log_file("").unwrap();
        assert!(!logger.has_log_file());
        logger.set_log_file("").unwrap();
        assert!(!logger.has_log_file());
    }

    #[test]
    fn test_set_log_file_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");
        let (logger, _out) = colored_logger();

        logger.set_log_file(&first).unwrap();
        logger.error(&[&"one"]);
        logger.set_log_file(&second).unwrap();
        logger.error(&[&"two"]);

        assert_eq!(logger.log_file_path(), Some(second.clone()));
        assert!(fs::read_to_string(&first).unwrap().ends_with("ERROR: one\n"));
        let content = fs::read_to_string(&second).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.ends_with("ERROR: two\n"));
    }

    #[test]
    fn test_set_log_file_failure_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.log");
        let logger = ConsoleLogger::with_writer(MemoryWriter::new());
        logger.set_log_file(&good).unwrap();

        let err = logger
            .set_log_file(dir.path().join("missing").join("bad.log"))
            .unwrap_err();
        assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::NotFound);
        assert_eq!(logger.log_file_path(), Some(good));
    }

    #[test]
    fn test_err() {
        let (logger, out) = colored_logger();
        let e = io::Error::other("disk full");

        logger.err(None::<&io::Error>);
        assert!(out.is_empty());

        logger.set_enable_error(false);
        logger.err(Some(&e));
        assert!(out.is_empty());

        logger.set_enable_error(true);
        logger.err(Some(&e));
        let from_err = out.take();
        logger.error(&[&e.to_string()]);
        let from_error = out.take();
        assert_eq!(
            &from_err[COLORED_PREFIX_LEN..],
            &from_error[COLORED_PREFIX_LEN..]
        );
        assert!(from_err.ends_with("\x1b[91mdisk full\x1b[0m\n"));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = ConsoleLogger::with_writer(MemoryWriter::new());

        let config = LoggerConfig::new()
            .with_severity(Severity::Error, false)
            .with_severity(Severity::Debug, true)
            .with_log_file(&path)
            .with_color(ColorMode::Never)
            .with_serialized_writes(true);
        logger.apply_config(&config).unwrap();

        assert_eq!(logger.config(), config);
        assert!(path.exists());

        logger.apply_config(&LoggerConfig::default()).unwrap();
        assert!(!logger.has_log_file());
        assert_eq!(logger.config(), LoggerConfig::default());
    }

    #[test]
    fn test_apply_config_failure_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ConsoleLogger::with_writer(MemoryWriter::new());
        let config = LoggerConfig::new()
            .with_all_enabled()
            .with_log_file(dir.path().join("missing").join("app.log"));

        assert!(logger.apply_config(&config).is_err());
        assert_eq!(logger.config(), LoggerConfig::default());
    }

    #[test]
    fn test_write_failures_are_counted() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let logger = ConsoleLogger::with_writer(Broken);
        logger.error(&[&"lost"]);
        logger.warning(&[&"lost"]);
        logger.info(&[&"disabled, not attempted"]);
        assert_eq!(logger.write_failures(), 2);
    }

    #[test]
    fn test_serialized_writes_keep_sinks_in_same_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let out = MemoryWriter::new();
        let logger = Arc::new(ConsoleLogger::with_writer(out.clone()));
        logger.set_color_mode(ColorMode::Never);
        logger.set_serialize_writes(true);
        logger.set_log_file(&path).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..50 {
                        logger.warning(&[&"thread", &t, &"line", &i]);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let console = out.contents();
        let file = fs::read_to_string(&path).unwrap();
        assert_eq!(console.lines().count(), 200);
        assert_eq!(console, file);
        assert!(file.lines().all(|l| l[24..].starts_with("Warning: thread ")));
    }
}
