//! crates/logging/src/options.rs
//! Per-call configuration accepted by every logging entry point.

use std::fmt;

use termlog_core::Color;

/// Optional configuration shared by every entry point.
///
/// The default is a bare log call: no prefix, level 0, empty channel name,
/// the kind's default color. Builders consume and return `self` so options
/// chain at the call site:
///
/// ```
/// use termlog::{Color, LogOptions};
///
/// let options = LogOptions::new()
///     .with_time()
///     .with_name("transfer")
///     .with_level(1)
///     .with_color(Color::BrightYellow);
/// assert!(options.time);
/// assert_eq!(options.name, "transfer");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogOptions {
    /// Prefix the message with `[HH:mm:ss] `. Mutually exclusive with
    /// [`LogOptions::ms_diff`].
    pub time: bool,
    /// Prefix the message with `[HH:mm:ss] [+delta] `, where the delta is the
    /// elapsed time since the previous latency-mode call on the same logger.
    /// Mutually exclusive with [`LogOptions::time`].
    pub ms_diff: bool,
    /// Caller-defined sequence number recorded in the event.
    pub sequence_number: Option<u64>,
    /// Integer severity forwarded to the console channel and the event.
    pub level: i32,
    /// Channel tag grouping related calls; rendered as a colorized prefix.
    pub name: String,
    /// Stringified execution-context handle, passed through opaquely.
    pub zone: Option<String>,
    /// Textual representation of an associated error value.
    pub error: Option<String>,
    /// Textual stack trace accompanying the error.
    pub stack_trace: Option<String>,
    /// Explicit color override; `None` selects the kind's default.
    pub color: Option<Color>,
}

impl LogOptions {
    /// Creates the default option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the `[HH:mm:ss] ` prefix.
    #[must_use]
    pub fn with_time(mut self) -> Self {
        self.time = true;
        self
    }

    /// Requests the `[HH:mm:ss] [+delta] ` latency prefix.
    #[must_use]
    pub fn with_ms_diff(mut self) -> Self {
        self.ms_diff = true;
        self
    }

    /// Attaches a sequence number.
    #[must_use]
    pub fn with_sequence_number(mut self, sequence_number: u64) -> Self {
        self.sequence_number = Some(sequence_number);
        self
    }

    /// Sets the integer severity level.
    #[must_use]
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the channel tag.
    #[must_use]
    pub fn with_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = name.into();
        self
    }

    /// Captures an execution-context handle by its string form.
    #[must_use]
    pub fn with_zone<T: fmt::Display>(mut self, zone: T) -> Self {
        self.zone = Some(zone.to_string());
        self
    }

    /// Captures an error value by its string form.
    #[must_use]
    pub fn with_error<T: fmt::Display>(mut self, error: T) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Captures a stack trace by its string form.
    #[must_use]
    pub fn with_stack_trace<T: fmt::Display>(mut self, stack_trace: T) -> Self {
        self.stack_trace = Some(stack_trace.to_string());
        self
    }

    /// Overrides the kind's default color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
