//! crates/logging/src/tracing_bridge.rs
//! Console channel that forwards records into the tracing ecosystem.
//!
//! Hosts already running a tracing subscriber can install this channel
//! instead of a writer and have log calls surface as ordinary tracing events:
//! the integer severity maps onto a [`tracing::Level`], the formatted line
//! becomes the event message, and the channel tag, sequence number, zone, and
//! error text ride along as fields.

use tracing::Level;

use crate::channel::{ConsoleChannel, ConsoleRecord};

/// Console channel emitting each record as a tracing event.
///
/// # Examples
///
/// ```ignore
/// use termlog::{Logger, LogOptions, TracingChannel};
///
/// tracing_subscriber::fmt::init();
///
/// let mut logger = Logger::with_channel(TracingChannel::new());
/// logger.set_ansi_enabled(false);
/// logger.info("session opened", &LogOptions::new().with_name("acp"))?;
/// # Ok::<(), termlog::LogError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingChannel;

impl TracingChannel {
    /// Creates the channel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps an integer severity level to a tracing level.
    ///
    /// Negative levels are diagnostics, 0 is the informational default, 1 is
    /// a warning, and anything higher is an error.
    #[must_use]
    pub const fn level_for(level: i32) -> Level {
        if level < 0 {
            Level::DEBUG
        } else if level == 0 {
            Level::INFO
        } else if level == 1 {
            Level::WARN
        } else {
            Level::ERROR
        }
    }
}

impl ConsoleChannel for TracingChannel {
    fn emit(&mut self, record: &ConsoleRecord<'_>) {
        let level = Self::level_for(record.level);
        if level == Level::ERROR {
            tracing::error!(
                channel = record.name,
                sequence = record.sequence_number,
                zone = record.zone,
                error = record.error,
                stack_trace = record.stack_trace,
                "{}",
                record.message
            );
        } else if level == Level::WARN {
            tracing::warn!(
                channel = record.name,
                sequence = record.sequence_number,
                zone = record.zone,
                error = record.error,
                stack_trace = record.stack_trace,
                "{}",
                record.message
            );
        } else if level == Level::DEBUG {
            tracing::debug!(
                channel = record.name,
                sequence = record.sequence_number,
                zone = record.zone,
                error = record.error,
                stack_trace = record.stack_trace,
                "{}",
                record.message
            );
        } else {
            tracing::info!(
                channel = record.name,
                sequence = record.sequence_number,
                zone = record.zone,
                error = record.error,
                stack_trace = record.stack_trace,
                "{}",
                record.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[test]
    fn level_mapping() {
        assert_eq!(TracingChannel::level_for(-2), Level::DEBUG);
        assert_eq!(TracingChannel::level_for(-1), Level::DEBUG);
        assert_eq!(TracingChannel::level_for(0), Level::INFO);
        assert_eq!(TracingChannel::level_for(1), Level::WARN);
        assert_eq!(TracingChannel::level_for(2), Level::ERROR);
        assert_eq!(TracingChannel::level_for(9), Level::ERROR);
    }

    /// Extracts the message field from a tracing event.
    #[derive(Default)]
    struct MessageVisitor {
        message: Option<String>,
    }

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.message = Some(format!("{value:?}"));
            }
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_owned());
            }
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            if let Some(message) = visitor.message {
                self.events
                    .lock()
                    .expect("capture mutex poisoned")
                    .push((*event.metadata().level(), message));
            }
        }
    }

    fn record(message: &str, level: i32) -> ConsoleRecord<'_> {
        ConsoleRecord {
            message,
            level,
            sequence_number: None,
            name: "",
            zone: None,
            error: None,
            stack_trace: None,
        }
    }

    #[test]
    fn records_surface_as_tracing_events() {
        let layer = CaptureLayer::default();
        let events = layer.events.clone();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            let mut channel = TracingChannel::new();
            channel.emit(&record("hello", 0));
            channel.emit(&record("careful", 1));
            channel.emit(&record("broken", 5));
        });

        let captured = events.lock().expect("capture mutex poisoned");
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0], (Level::INFO, "hello".to_owned()));
        assert_eq!(captured[1], (Level::WARN, "careful".to_owned()));
        assert_eq!(captured[2], (Level::ERROR, "broken".to_owned()));
    }
}
