//! crates/core/src/kind.rs
//! Closed enumeration of log entry-point kinds.

use std::fmt;
use std::str::FromStr;

/// Tag identifying which entry point produced a log call.
///
/// The wire spelling (`logi`, `logw`, `loge`, `logd`, `hex`, `chr`, `ansi`)
/// is what sinks receive in the serialized event; [`LogKind::as_str`] returns
/// the same strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub enum LogKind {
    /// Informational message (`logi`).
    #[serde(rename = "logi")]
    Info,
    /// Warning message (`logw`).
    #[serde(rename = "logw")]
    Warn,
    /// Error message (`loge`).
    #[serde(rename = "loge")]
    Error,
    /// Debug message (`logd`).
    #[serde(rename = "logd")]
    Debug,
    /// Byte buffer rendered as uppercase hex pairs (`hex`).
    #[serde(rename = "hex")]
    Hex,
    /// Byte buffer rendered as printable characters (`chr`).
    #[serde(rename = "chr")]
    Char,
    /// Byte buffer reinterpreted as a raw ANSI string (`ansi`).
    #[serde(rename = "ansi")]
    Ansi,
}

impl LogKind {
    /// Returns the wire tag recorded in events for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog_core::LogKind;
    ///
    /// assert_eq!(LogKind::Info.as_str(), "logi");
    /// assert_eq!(LogKind::Char.as_str(), "chr");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "logi",
            Self::Warn => "logw",
            Self::Error => "loge",
            Self::Debug => "logd",
            Self::Hex => "hex",
            Self::Char => "chr",
            Self::Ansi => "ansi",
        }
    }

    /// Reports whether this kind carries a byte-buffer payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog_core::LogKind;
    ///
    /// assert!(LogKind::Hex.is_buffer());
    /// assert!(!LogKind::Warn.is_buffer());
    /// ```
    #[must_use]
    pub const fn is_buffer(self) -> bool {
        matches!(self, Self::Hex | Self::Char | Self::Ansi)
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`LogKind`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLogKindError {
    _private: (),
}

impl fmt::Display for ParseLogKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log kind tag")
    }
}

impl std::error::Error for ParseLogKindError {}

impl FromStr for LogKind {
    type Err = ParseLogKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "logi" => Ok(Self::Info),
            "logw" => Ok(Self::Warn),
            "loge" => Ok(Self::Error),
            "logd" => Ok(Self::Debug),
            "hex" => Ok(Self::Hex),
            "chr" => Ok(Self::Char),
            "ansi" => Ok(Self::Ansi),
            _ => Err(ParseLogKindError { _private: () }),
        }
    }
}
