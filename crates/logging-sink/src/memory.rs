//! crates/logging-sink/src/memory.rs
//! In-memory collecting sink backed by a shared buffer.

use std::sync::{Arc, Mutex};

use termlog_core::{LogEvent, Sink, SinkError};

/// Sink collecting events into a shared in-memory buffer.
///
/// Cloning yields another handle over the same buffer, so one clone can be
/// registered with a logger while the original stays behind to inspect what
/// arrived. This is the canonical test sink.
///
/// # Examples
///
/// See the crate-level example; the usual pattern is
/// `logger.register_sink(sink.clone())` followed by `sink.take()`.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the collected events, leaving them in place.
    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("memory sink mutex poisoned").clone()
    }

    /// Drains and returns the collected events.
    #[must_use]
    pub fn take(&self) -> Vec<LogEvent> {
        std::mem::take(&mut *self.events.lock().expect("memory sink mutex poisoned"))
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().expect("memory sink mutex poisoned").len()
    }

    /// Reports whether no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn on_log(&mut self, event: &LogEvent) -> Result<(), SinkError> {
        self.events
            .lock()
            .expect("memory sink mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}
