//! In-memory console writer for capturing output

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// A cloneable writer that keeps everything written to it
///
/// Clones share one buffer, so a clone handed to
/// `ConsoleLogger::with_writer` can be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Return the contents and clear the buffer
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buffer.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
