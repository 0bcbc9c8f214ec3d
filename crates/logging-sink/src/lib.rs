#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `termlog-sink` provides ready-made implementations of the
//! [`Sink`](termlog_core::Sink) contract: [`JsonLinesSink`] streams each
//! event as one JSON object per line into any [`std::io::Write`] target, and
//! [`MemorySink`] collects events into a shared in-memory buffer for tests
//! and embedders that inspect them after the fact.
//!
//! # Design
//!
//! Sinks are consumers of the public contract, deliberately kept out of the
//! logger crate: anything implementing the single-method trait can be
//! registered, and these two cover the common file-and-test cases without the
//! logger knowing about either.
//!
//! # Errors
//!
//! [`JsonLinesSink`] surfaces serialization and I/O errors unchanged; the
//! logger propagates them to the original caller rather than masking them.
//! [`MemorySink`] is infallible.
//!
//! # Examples
//!
//! Collect events in memory and read them back:
//!
//! ```
//! use termlog_core::{Color, LogEvent, LogKind, Sink};
//! use termlog_sink::MemorySink;
//!
//! let sink = MemorySink::new();
//! let mut handle = sink.clone();
//!
//! let event = LogEvent {
//!     kind: LogKind::Info,
//!     timestamp: "2026-08-07T10:15:30+00:00".into(),
//!     message: "ready".into(),
//!     time_printed: false,
//!     ms_diff_printed: false,
//!     time_hhmmss: None,
//!     sequence_number: None,
//!     level: 0,
//!     name: String::new(),
//!     zone: None,
//!     error: None,
//!     stack_trace: None,
//!     ansi_enabled: false,
//!     color: Color::Green,
//!     bytes: None,
//!     render: None,
//!     text: None,
//! };
//! handle.on_log(&event).unwrap();
//!
//! assert_eq!(sink.len(), 1);
//! assert_eq!(sink.take()[0].message, "ready");
//! ```

mod json;
mod memory;

pub use json::JsonLinesSink;
pub use memory::MemorySink;
