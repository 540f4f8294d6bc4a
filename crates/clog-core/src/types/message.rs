//! Message normalization
//!
//! Callers pass any number of displayable values; they are joined with single
//! spaces into one message. A message that ends up wrapped in one outer pair
//! of square brackets has that pair removed, so logging a single [`List`]
//! produces a flat `a b c`.

use std::fmt::{self, Display, Write};

/// Text used for an absent value
pub const NIL_TEXT: &str = "<nil>";

/// Join `values` with single spaces and strip one outer `[...]` pair
///
/// # Example
///
/// ```
/// use clog_core::types::{format_message, List};
///
/// assert_eq!(format_message(&[&"took", &12, &"ms"]), "took 12 ms");
/// assert_eq!(format_message(&[&List(&["a", "b"])]), "a b");
/// ```
pub fn format_message(values: &[&dyn Display]) -> String {
    let mut joined = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        let _ = write!(joined, "{value}");
    }
    strip_brackets(joined)
}

/// Remove exactly one leading `[` and trailing `]`, nothing else
fn strip_brackets(message: String) -> String {
    if message.len() >= 2 && message.starts_with('[') && message.ends_with(']') {
        message[1..message.len() - 1].to_string()
    } else {
        message
    }
}

/// Displays as `<nil>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

impl Display for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NIL_TEXT)
    }
}

/// An optional value that displays as `<nil>` when absent
#[derive(Debug, Clone, Copy)]
pub struct OrNil<T>(pub Option<T>);

impl<T: Display> Display for OrNil<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NIL_TEXT),
        }
    }
}

/// Wrap an `Option` so `None` renders as `<nil>`
pub fn or_nil<T: Display>(value: Option<T>) -> OrNil<T> {
    OrNil(value)
}

/// A slice rendered as `[a b c]`
#[derive(Debug, Clone, Copy)]
pub struct List<'a, T>(pub &'a [T]);

impl<T: Display> Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            item.fmt(f)?;
        }
        f.write_char(']')
    }
}
