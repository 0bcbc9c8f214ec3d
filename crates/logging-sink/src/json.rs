//! crates/logging-sink/src/json.rs
//! Sink streaming events as JSON lines into a writer.

use std::io::{self, Write};

use termlog_core::{LogEvent, Sink, SinkError};

/// Sink that writes each event as one JSON object per line.
///
/// Works over any [`io::Write`] implementor: a file, a socket, a pipe, or a
/// `Vec<u8>` in tests. Serialization and I/O errors surface unchanged through
/// the sink contract, so a broken destination fails the logging call that hit
/// it.
///
/// # Examples
///
/// ```
/// use termlog_core::{Color, LogEvent, LogKind, Sink};
/// use termlog_sink::JsonLinesSink;
///
/// let mut sink = JsonLinesSink::new(Vec::new());
/// # let event = LogEvent {
/// #     kind: LogKind::Debug,
/// #     timestamp: "2026-08-07T10:15:30+00:00".into(),
/// #     message: "probe".into(),
/// #     time_printed: false,
/// #     ms_diff_printed: false,
/// #     time_hhmmss: None,
/// #     sequence_number: None,
/// #     level: 0,
/// #     name: String::new(),
/// #     zone: None,
/// #     error: None,
/// #     stack_trace: None,
/// #     ansi_enabled: false,
/// #     color: Color::Cyan,
/// #     bytes: None,
/// #     render: None,
/// #     text: None,
/// # };
/// sink.on_log(&event).unwrap();
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with('\n'));
/// assert!(output.contains("\"kind\":\"logd\""));
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W> JsonLinesSink<W> {
    /// Creates a sink over the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn on_log(&mut self, event: &LogEvent) -> Result<(), SinkError> {
        let line = serde_json::to_string(event)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
