#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `termlog` is a lightweight leveled logger: one [`Logger`] call produces a
//! colorized human-readable console line and, when a sink is registered, a
//! structured [`LogEvent`] delivered synchronously to that sink. Entry points
//! exist per severity ([`Logger::info`], [`Logger::warn`], [`Logger::error`],
//! [`Logger::debug`]) and per byte-buffer rendering mode
//! ([`Logger::buffer_hex`], [`Logger::buffer_char`], [`Logger::buffer_ansi`]),
//! all funnelling through a single dispatch chokepoint.
//!
//! # Design
//!
//! The logger is an explicit context object rather than process-global state:
//! it owns the console channel, the optional sink, the ANSI color flag, and
//! the last-log instant used for latency (`ms_diff`) prefixes. Tests and
//! embedders isolate themselves by constructing fresh loggers. The console
//! seam is the [`ConsoleChannel`] trait; [`WriterChannel`] is the stderr
//! default, and the `tracing` feature adds a channel that forwards records to
//! the tracing ecosystem instead.
//!
//! # Invariants
//!
//! - The `time` and `ms_diff` options are mutually exclusive; requesting both
//!   returns [`LogError::ConflictingPrefixOptions`] before any side effect.
//! - Console output is best-effort and never the source of a propagated
//!   failure; the only propagated failures are the validation error above and
//!   sink errors, both surfaced synchronously to the caller.
//! - Sink delivery happens on the caller's stack, exactly once per call, with
//!   the uncolored message.
//!
//! # Examples
//!
//! Log into an in-memory channel and inspect the rendered line:
//!
//! ```
//! use termlog::{LogOptions, Logger, WriterChannel};
//!
//! let mut logger = Logger::with_channel(WriterChannel::new(Vec::new()));
//! logger.set_ansi_enabled(false);
//! logger.info("ready", &LogOptions::default())?;
//!
//! let output = String::from_utf8(logger.into_channel().into_inner()).unwrap();
//! assert_eq!(output, "ready\n");
//! # Ok::<(), termlog::LogError>(())
//! ```
//!
//! # See also
//!
//! - `termlog-core` for the event model and byte rendering.
//! - `termlog-sink` for ready-made JSON-lines and in-memory sinks.

mod channel;
pub mod clock;
mod error;
mod logger;
mod options;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use channel::{ConsoleChannel, ConsoleRecord, WriterChannel};
pub use error::LogError;
pub use logger::Logger;
pub use options::LogOptions;
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingChannel;

pub use termlog_core::{BufferRender, Color, LogEvent, LogKind, Sink, SinkError};
