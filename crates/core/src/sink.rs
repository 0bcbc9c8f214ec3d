//! crates/core/src/sink.rs
//! Capability trait implemented by external event collectors.

use crate::event::LogEvent;

/// Error surfaced by a sink's handler.
///
/// Boxed so sinks forwarding to files, sockets, or analytics pipelines can
/// return their own error types unchanged.
pub type SinkError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Consumer of structured log events.
///
/// At most one sink is registered with a logger at a time. Delivery is
/// synchronous and unbatched: the handler runs on the same call stack as the
/// log call, and a failure propagates to that caller rather than being
/// swallowed - sink bugs are meant to be visible immediately.
///
/// # Examples
///
/// Count events as they arrive:
///
/// ```
/// use termlog_core::{LogEvent, Sink, SinkError};
///
/// struct Counter(usize);
///
/// impl Sink for Counter {
///     fn on_log(&mut self, _event: &LogEvent) -> Result<(), SinkError> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Sink {
    /// Handles one event.
    ///
    /// The event is borrowed; implementations that retain it clone what they
    /// need.
    fn on_log(&mut self, event: &LogEvent) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn on_log(&mut self, event: &LogEvent) -> Result<(), SinkError> {
        (**self).on_log(event)
    }
}
