//! Logger implementations
//!
//! - `ConsoleLogger`: colored console lines plus an optional plain log file
//! - `NoOpLogger`: discards everything
//! - `MemoryWriter`: captures console output in memory

mod traits;
mod noop;
mod console;
mod style;
mod memory;
mod facade;
pub mod file_sink;

pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use console::{render_line, ConsoleLogger, RenderedLine, TIMESTAMP_FORMAT};
pub use style::{paint_into, ColorMode, TIMESTAMP_COLOR};
pub use memory::MemoryWriter;
pub use file_sink::LogFile;
