//! crates/core/src/render.rs
//! Pure byte-buffer rendering for the hex, character, and raw-ANSI modes.

use std::fmt;
use std::str::FromStr;

use crate::kind::LogKind;

/// Rendering mode applied to a byte buffer before dispatch.
///
/// Rendering is a pure transformation with no error conditions. Malformed
/// sequences (for example truncated escape codes in [`BufferRender::Ansi`]
/// input) are passed through uninterpreted; making sense of them is the
/// terminal's job.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub enum BufferRender {
    /// Two uppercase hex digits per byte, space-separated.
    #[serde(rename = "hex")]
    Hex,
    /// Printable ASCII bytes as themselves, everything else as `0xHH`.
    #[serde(rename = "chr")]
    Char,
    /// The bytes reinterpreted one-to-one as characters (Latin-1 mapping).
    #[serde(rename = "ansi")]
    Ansi,
}

impl BufferRender {
    /// Returns the wire tag recorded in the event `render` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Char => "chr",
            Self::Ansi => "ansi",
        }
    }

    /// Returns the [`LogKind`] reported by the entry point for this mode.
    #[must_use]
    pub const fn kind(self) -> LogKind {
        match self {
            Self::Hex => LogKind::Hex,
            Self::Char => LogKind::Char,
            Self::Ansi => LogKind::Ansi,
        }
    }

    /// Renders the buffer body without the byte-count prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog_core::BufferRender;
    ///
    /// assert_eq!(BufferRender::Hex.body(&[0x0a, 0xff]), "0A FF");
    /// assert_eq!(BufferRender::Char.body(&[b'O', b'K', 7]), "O K 0x07");
    /// assert_eq!(BufferRender::Ansi.body(&[27, 91, 109]), "\x1b[m");
    /// ```
    #[must_use]
    pub fn body(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => {
                let tokens: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
                tokens.join(" ")
            }
            Self::Char => {
                let tokens: Vec<String> = bytes
                    .iter()
                    .map(|&b| {
                        if (32..=126).contains(&b) {
                            char::from(b).to_string()
                        } else {
                            format!("0x{b:02X}")
                        }
                    })
                    .collect();
                tokens.join(" ")
            }
            Self::Ansi => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Renders the full message for this mode.
    ///
    /// Hex and character modes prepend the `(<N> bytes) ` count, even for an
    /// empty buffer. Raw-ANSI mode has no prefix; the message IS the body.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog_core::BufferRender;
    ///
    /// assert_eq!(
    ///     BufferRender::Char.message(&[0x44, 0x41, 0x52, 0x54]),
    ///     "(4 bytes) D A R T"
    /// );
    /// assert_eq!(BufferRender::Hex.message(&[]), "(0 bytes) ");
    /// ```
    #[must_use]
    pub fn message(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex | Self::Char => {
                format!("({} bytes) {}", bytes.len(), self.body(bytes))
            }
            Self::Ansi => self.body(bytes),
        }
    }
}

impl fmt::Display for BufferRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`BufferRender`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseBufferRenderError {
    _private: (),
}

impl fmt::Display for ParseBufferRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised buffer render tag")
    }
}

impl std::error::Error for ParseBufferRenderError {}

impl FromStr for BufferRender {
    type Err = ParseBufferRenderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "hex" => Ok(Self::Hex),
            "chr" => Ok(Self::Char),
            "ansi" => Ok(Self::Ansi),
            _ => Err(ParseBufferRenderError { _private: () }),
        }
    }
}
