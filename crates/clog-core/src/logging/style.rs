//! Console coloring

use colored::Color;
use serde::{Deserialize, Serialize};

/// Color of the timestamp on every console line
pub const TIMESTAMP_COLOR: Color = Color::Green;

/// Whether console lines carry ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the `colored` crate: `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`,
    /// terminal detection and `colored::control::set_override`
    #[default]
    Auto,
    /// Always emit ANSI codes
    Always,
    /// Never emit ANSI codes
    Never,
}

impl ColorMode {
    /// Resolve the mode to a yes/no for the line being written now
    pub fn should_colorize(&self) -> bool {
        match self {
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        match self {
            ColorMode::Auto => 0,
            ColorMode::Always => 1,
            ColorMode::Never => 2,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => ColorMode::Always,
            2 => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }
}

/// Append `text` to `out`, wrapped in the SGR codes for `color`
///
/// With `color == None` or `enabled == false` the text is appended as is.
pub fn paint_into(out: &mut String, text: &str, color: Option<Color>, enabled: bool) {
    match color {
        Some(color) if enabled => {
            out.push_str("\x1b[");
            out.push_str(&color.to_fg_str());
            out.push('m');
            out.push_str(text);
            out.push_str("\x1b[0m");
        }
        _ => out.push_str(text),
    }
}
