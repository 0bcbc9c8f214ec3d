//! crates/logging/src/logger.rs
//! The logger context and the dispatch chokepoint behind every entry point.

use std::io;
use std::time::Instant;

use chrono::Local;
use termlog_core::{BufferRender, Color, LogEvent, LogKind, Sink};

use crate::channel::{ConsoleChannel, ConsoleRecord, WriterChannel};
use crate::clock::{self, DiffTracker};
use crate::error::LogError;
use crate::options::LogOptions;

/// Logging context: console channel, sink slot, ANSI flag, and the
/// last-log instant backing latency prefixes.
///
/// One logger is one logging domain. The state the original design kept
/// process-wide lives here instead, so embedders can run several independent
/// loggers and tests stay isolated by constructing fresh instances.
///
/// # Examples
///
/// Capture events with a sink while rendering to an in-memory console:
///
/// ```
/// use termlog::{LogKind, LogOptions, Logger, WriterChannel};
/// use termlog_sink::MemorySink;
///
/// let mut logger = Logger::with_channel(WriterChannel::new(Vec::new()));
/// let sink = MemorySink::new();
/// logger.register_sink(sink.clone());
///
/// logger.warn("low disk space", &LogOptions::new().with_name("fs"))?;
///
/// let events = sink.take();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].kind, LogKind::Warn);
/// assert_eq!(events[0].name, "fs");
/// # Ok::<(), termlog::LogError>(())
/// ```
pub struct Logger<C = WriterChannel<io::Stderr>> {
    channel: C,
    sink: Option<Box<dyn Sink>>,
    ansi_enabled: bool,
    diff: DiffTracker,
}

impl Logger<WriterChannel<io::Stderr>> {
    /// Creates a logger writing to standard error with colors enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_channel(WriterChannel::stderr())
    }
}

impl Default for Logger<WriterChannel<io::Stderr>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Logger<C> {
    /// Creates a logger over the given console channel, colors enabled.
    #[must_use]
    pub fn with_channel(channel: C) -> Self {
        Self {
            channel,
            sink: None,
            ansi_enabled: true,
            diff: DiffTracker::new(),
        }
    }

    /// Borrows the console channel.
    #[must_use]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Mutably borrows the console channel.
    #[must_use]
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Consumes the logger and returns the console channel.
    #[must_use]
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Reports whether console lines are wrapped in ANSI color escapes.
    #[must_use]
    pub const fn ansi_enabled(&self) -> bool {
        self.ansi_enabled
    }

    /// Enables or disables ANSI color wrapping of console lines.
    ///
    /// The flag does not affect the snapshot recorded in events, nor raw
    /// buffer output from [`Logger::buffer_ansi`], whose whole point is to
    /// emit its escape bytes verbatim.
    pub fn set_ansi_enabled(&mut self, enabled: bool) {
        self.ansi_enabled = enabled;
    }

    /// Registers `sink`, unconditionally replacing any previous registration.
    pub fn register_sink<S: Sink + 'static>(&mut self, sink: S) {
        self.sink = Some(Box::new(sink));
    }

    /// Clears the registered sink, returning it if one was present.
    ///
    /// Calling this with no sink registered is not an error.
    pub fn unregister_sink(&mut self) -> Option<Box<dyn Sink>> {
        self.sink.take()
    }

    /// Reports whether a sink is currently registered.
    #[must_use]
    pub const fn sink_registered(&self) -> bool {
        self.sink.is_some()
    }
}

impl<C: ConsoleChannel> Logger<C> {
    /// Logs a message under an explicit kind tag.
    ///
    /// This is the kind-parameterized entry the severity wrappers forward to.
    /// Buffer kinds logged through here carry no byte payload; use
    /// [`Logger::log_buffer`] for those.
    pub fn log(
        &mut self,
        kind: LogKind,
        message: &str,
        options: &LogOptions,
    ) -> Result<(), LogError> {
        self.dispatch(kind, message.to_owned(), None, options)
    }

    /// Logs an informational message (`logi`, default green).
    pub fn info(&mut self, message: &str, options: &LogOptions) -> Result<(), LogError> {
        self.log(LogKind::Info, message, options)
    }

    /// Logs a warning (`logw`, default yellow).
    pub fn warn(&mut self, message: &str, options: &LogOptions) -> Result<(), LogError> {
        self.log(LogKind::Warn, message, options)
    }

    /// Logs an error (`loge`, default red).
    pub fn error(&mut self, message: &str, options: &LogOptions) -> Result<(), LogError> {
        self.log(LogKind::Error, message, options)
    }

    /// Logs a debug message (`logd`, default cyan).
    pub fn debug(&mut self, message: &str, options: &LogOptions) -> Result<(), LogError> {
        self.log(LogKind::Debug, message, options)
    }

    /// Logs a byte buffer under an explicit render mode.
    ///
    /// The rendered message, the raw bytes, the mode tag, and the rendered
    /// body travel in the event's `bytes`/`render`/`text` fields. Empty
    /// buffers are legal and render a `(0 bytes) ` message in the counted
    /// modes.
    pub fn log_buffer(
        &mut self,
        render: BufferRender,
        buf: &[u8],
        options: &LogOptions,
    ) -> Result<(), LogError> {
        let message = render.message(buf);
        let text = render.body(buf);
        self.dispatch(render.kind(), message, Some((buf.to_vec(), render, text)), options)
    }

    /// Logs a buffer as space-separated uppercase hex pairs (`hex`).
    pub fn buffer_hex(&mut self, buf: &[u8], options: &LogOptions) -> Result<(), LogError> {
        self.log_buffer(BufferRender::Hex, buf, options)
    }

    /// Logs a buffer as printable characters with `0xHH` fallbacks (`chr`).
    pub fn buffer_char(&mut self, buf: &[u8], options: &LogOptions) -> Result<(), LogError> {
        self.log_buffer(BufferRender::Char, buf, options)
    }

    /// Logs a buffer reinterpreted as a raw ANSI string (`ansi`).
    ///
    /// The escape bytes land in the message verbatim regardless of the
    /// logger's ANSI flag; a capable terminal executes them.
    pub fn buffer_ansi(&mut self, buf: &[u8], options: &LogOptions) -> Result<(), LogError> {
        self.log_buffer(BufferRender::Ansi, buf, options)
    }

    /// Single chokepoint behind every entry point.
    ///
    /// Validates the option set, builds the prefixed line, emits to the
    /// console channel, and delivers the structured event to the registered
    /// sink. The mutual-exclusion check runs before any side effect.
    fn dispatch(
        &mut self,
        kind: LogKind,
        message: String,
        buffer: Option<(Vec<u8>, BufferRender, String)>,
        options: &LogOptions,
    ) -> Result<(), LogError> {
        if options.time && options.ms_diff {
            return Err(LogError::ConflictingPrefixOptions);
        }

        let color = options.color.unwrap_or(Color::default_for(kind));
        let now = Local::now();

        let (prefix, time_hhmmss) = if options.time {
            let hhmmss = clock::hhmmss(&now);
            (format!("[{hhmmss}] "), Some(hhmmss))
        } else if options.ms_diff {
            let elapsed = self.diff.record_and_diff(Instant::now());
            let hhmmss = clock::hhmmss(&now);
            let delta = clock::format_elapsed(elapsed);
            (format!("[{hhmmss}] [{delta}] "), Some(hhmmss))
        } else {
            (String::new(), None)
        };

        let line = format!("{prefix}{message}");
        let console_line = if self.ansi_enabled {
            color.paint(&line)
        } else {
            line.clone()
        };
        let console_name = if self.ansi_enabled && !options.name.is_empty() {
            color.paint(&options.name)
        } else {
            options.name.clone()
        };

        self.channel.emit(&ConsoleRecord {
            message: &console_line,
            level: options.level,
            sequence_number: options.sequence_number,
            name: &console_name,
            zone: options.zone.as_deref(),
            error: options.error.as_deref(),
            stack_trace: options.stack_trace.as_deref(),
        });

        if let Some(sink) = self.sink.as_mut() {
            let (bytes, render, text) = match buffer {
                Some((bytes, render, text)) => (Some(bytes), Some(render), Some(text)),
                None => (None, None, None),
            };
            let event = LogEvent {
                kind,
                timestamp: now.to_rfc3339(),
                message: line,
                time_printed: options.time,
                ms_diff_printed: options.ms_diff,
                time_hhmmss,
                sequence_number: options.sequence_number,
                level: options.level,
                name: options.name.clone(),
                zone: options.zone.clone(),
                error: options.error.clone(),
                stack_trace: options.stack_trace.clone(),
                ansi_enabled: self.ansi_enabled,
                color,
                bytes,
                render,
                text,
            };
            sink.on_log(&event).map_err(LogError::Sink)?;
        }

        Ok(())
    }
}
