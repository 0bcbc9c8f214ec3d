//! crates/core/src/color.rs
//! Terminal color table and per-kind default colors.

use std::fmt;
use std::str::FromStr;

use crate::kind::LogKind;

/// SGR sequence that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Named terminal color, eight standard entries plus their bright variants.
///
/// Each variant maps to a fixed SGR foreground escape. Events record the
/// resolved color by name using the camelCase spelling returned by
/// [`Color::as_str`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    /// Standard black (`\x1b[30m`).
    Black,
    /// Standard red (`\x1b[31m`).
    Red,
    /// Standard green (`\x1b[32m`).
    Green,
    /// Standard yellow (`\x1b[33m`).
    Yellow,
    /// Standard blue (`\x1b[34m`).
    Blue,
    /// Standard magenta (`\x1b[35m`).
    Magenta,
    /// Standard cyan (`\x1b[36m`).
    Cyan,
    /// Standard white (`\x1b[37m`).
    White,
    /// Bright black (`\x1b[90m`).
    BrightBlack,
    /// Bright red (`\x1b[91m`).
    BrightRed,
    /// Bright green (`\x1b[92m`).
    BrightGreen,
    /// Bright yellow (`\x1b[93m`).
    BrightYellow,
    /// Bright blue (`\x1b[94m`).
    BrightBlue,
    /// Bright magenta (`\x1b[95m`).
    BrightMagenta,
    /// Bright cyan (`\x1b[96m`).
    BrightCyan,
    /// Bright white (`\x1b[97m`).
    BrightWhite,
}

impl Color {
    /// Returns the SGR foreground escape for this color.
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::BrightBlack => "\x1b[90m",
            Self::BrightRed => "\x1b[91m",
            Self::BrightGreen => "\x1b[92m",
            Self::BrightYellow => "\x1b[93m",
            Self::BrightBlue => "\x1b[94m",
            Self::BrightMagenta => "\x1b[95m",
            Self::BrightCyan => "\x1b[96m",
            Self::BrightWhite => "\x1b[97m",
        }
    }

    /// Returns the camelCase name recorded in events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "brightBlack",
            Self::BrightRed => "brightRed",
            Self::BrightGreen => "brightGreen",
            Self::BrightYellow => "brightYellow",
            Self::BrightBlue => "brightBlue",
            Self::BrightMagenta => "brightMagenta",
            Self::BrightCyan => "brightCyan",
            Self::BrightWhite => "brightWhite",
        }
    }

    /// Returns the default color for an entry-point kind.
    ///
    /// Every entry point resolves its effective color as the explicit
    /// override, falling back to this table.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog_core::{Color, LogKind};
    ///
    /// assert_eq!(Color::default_for(LogKind::Info), Color::Green);
    /// assert_eq!(Color::default_for(LogKind::Error), Color::Red);
    /// assert_eq!(Color::default_for(LogKind::Ansi), Color::White);
    /// ```
    #[must_use]
    pub const fn default_for(kind: LogKind) -> Self {
        match kind {
            LogKind::Info => Self::Green,
            LogKind::Warn => Self::Yellow,
            LogKind::Error => Self::Red,
            LogKind::Debug | LogKind::Hex | LogKind::Char => Self::Cyan,
            LogKind::Ansi => Self::White,
        }
    }

    /// Wraps `text` in this color's escape and the [`RESET`] sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog_core::Color;
    ///
    /// assert_eq!(Color::Red.paint("boom"), "\x1b[31mboom\x1b[0m");
    /// ```
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.escape(), text, RESET)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Color`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorError {
    _private: (),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised color name")
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            "brightBlack" => Ok(Self::BrightBlack),
            "brightRed" => Ok(Self::BrightRed),
            "brightGreen" => Ok(Self::BrightGreen),
            "brightYellow" => Ok(Self::BrightYellow),
            "brightBlue" => Ok(Self::BrightBlue),
            "brightMagenta" => Ok(Self::BrightMagenta),
            "brightCyan" => Ok(Self::BrightCyan),
            "brightWhite" => Ok(Self::BrightWhite),
            _ => Err(ParseColorError { _private: () }),
        }
    }
}
