//! crates/logging/src/channel.rs
//! Console seam: the channel trait and the writer-backed default.

use std::io::{self, Write};

/// Arguments forwarded to the console channel for one log call.
///
/// `message` and `name` arrive exactly as they will be shown: when the
/// logger's ANSI flag is set they are already wrapped in the resolved color's
/// escape codes. The remaining fields are metadata a richer channel (a
/// debugger pane, a tracing backend) may use; the plain writer channel prints
/// only the line plus any error text.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleRecord<'a> {
    /// Formatted console line, prefix applied, possibly colorized.
    pub message: &'a str,
    /// Integer severity supplied by the caller.
    pub level: i32,
    /// Caller-defined sequence number.
    pub sequence_number: Option<u64>,
    /// Channel tag, possibly colorized; empty when the caller set none.
    pub name: &'a str,
    /// Stringified execution-context handle.
    pub zone: Option<&'a str>,
    /// Textual error representation.
    pub error: Option<&'a str>,
    /// Textual stack trace.
    pub stack_trace: Option<&'a str>,
}

/// Destination for formatted console lines.
///
/// Emission is infallible by contract: console output is best-effort, and a
/// broken console must never fail the logging call that produced it.
/// Implementations swallow their own I/O errors.
pub trait ConsoleChannel {
    /// Renders one record.
    fn emit(&mut self, record: &ConsoleRecord<'_>);
}

/// Console channel that writes lines to any [`io::Write`] target.
///
/// A non-empty name is rendered as a `[name] ` prefix; error and stack-trace
/// text follow on their own lines. Write failures are ignored.
///
/// # Examples
///
/// ```
/// use termlog::{ConsoleChannel, ConsoleRecord, WriterChannel};
///
/// let mut channel = WriterChannel::new(Vec::new());
/// channel.emit(&ConsoleRecord {
///     message: "listening",
///     level: 0,
///     sequence_number: None,
///     name: "net",
///     zone: None,
///     error: None,
///     stack_trace: None,
/// });
///
/// let output = String::from_utf8(channel.into_inner()).unwrap();
/// assert_eq!(output, "[net] listening\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WriterChannel<W> {
    writer: W,
}

impl<W> WriterChannel<W> {
    /// Creates a channel over the given writer.
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

    /// Consumes the channel and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterChannel<io::Stderr> {
    /// Creates the default channel, writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleChannel for WriterChannel<W> {
    fn emit(&mut self, record: &ConsoleRecord<'_>) {
        if record.name.is_empty() {
            let _ = writeln!(self.writer, "{}", record.message);
        } else {
            let _ = writeln!(self.writer, "[{}] {}", record.name, record.message);
        }
        if let Some(error) = record.error {
            let _ = writeln!(self.writer, "  error: {error}");
        }
        if let Some(stack_trace) = record.stack_trace {
            let _ = writeln!(self.writer, "{stack_trace}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(message: &'a str, name: &'a str) -> ConsoleRecord<'a> {
        ConsoleRecord {
            message,
            level: 0,
            sequence_number: None,
            name,
            zone: None,
            error: None,
            stack_trace: None,
        }
    }

    fn rendered(channel: WriterChannel<Vec<u8>>) -> String {
        String::from_utf8(channel.into_inner()).expect("utf-8")
    }

    #[test]
    fn bare_message_without_name() {
        let mut channel = WriterChannel::new(Vec::new());
        channel.emit(&record("hello", ""));
        assert_eq!(rendered(channel), "hello\n");
    }

    #[test]
    fn name_becomes_bracketed_prefix() {
        let mut channel = WriterChannel::new(Vec::new());
        channel.emit(&record("hello", "srv"));
        assert_eq!(rendered(channel), "[srv] hello\n");
    }

    #[test]
    fn error_and_stack_trace_follow_the_line() {
        let mut channel = WriterChannel::new(Vec::new());
        channel.emit(&ConsoleRecord {
            error: Some("boom"),
            stack_trace: Some("at main"),
            ..record("failed", "")
        });
        assert_eq!(rendered(channel), "failed\n  error: boom\nat main\n");
    }

    #[test]
    fn write_failures_are_swallowed() {
        struct FailWriter;

        impl Write for FailWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::other("closed"))
            }
        }

        let mut channel = WriterChannel::new(FailWriter);
        channel.emit(&record("hello", "srv"));
    }
}
