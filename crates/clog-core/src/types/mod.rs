//! Core types shared by every logger
//!
//! This module contains the severity levels and message normalization.

mod severity;
mod message;

pub use severity::Severity;
pub use message::{format_message, or_nil, List, Nil, OrNil, NIL_TEXT};
