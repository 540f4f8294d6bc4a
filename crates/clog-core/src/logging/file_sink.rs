//! Append-only log file
//!
//! The file is opened in append mode and created when missing (mode 0644 on
//! Unix). Dropping a [`LogFile`] closes the handle.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{LogError, LogResult};

/// An open log file
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    file: File,
}

impl LogFile {
    /// Open `path` for appending, creating it if absent
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let file = open_options()
            .open(path)
            .map_err(|e| LogError::open_log_file(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path the file was opened with
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one already formatted line
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.file.write_all(line.as_bytes())?;
        self.file.flush()
    }
}

#[cfg(unix)]
fn open_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.create(true).append(true).mode(0o644);
    options
}

#[cfg(not(unix))]
fn open_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    options
}
