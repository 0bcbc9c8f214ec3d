#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `termlog-core` holds the data model shared across the termlog workspace:
//! the closed [`LogKind`] tag identifying which entry point produced a log
//! call, the sixteen-entry [`Color`] table with its terminal escape codes,
//! the pure byte-buffer rendering modes in [`render`], the serializable
//! [`LogEvent`] record, and the [`Sink`] capability trait implemented by
//! external event collectors.
//!
//! # Design
//!
//! Everything in this crate is either plain data or a pure function. The
//! dispatch pipeline that produces events lives in the `termlog` crate; sink
//! implementations that consume them live in `termlog-sink`. Keeping the
//! model separate lets sink authors depend on the contract without pulling in
//! the logger itself.
//!
//! # Invariants
//!
//! - [`LogEvent`] serializes to a JSON object containing only strings,
//!   numbers, booleans, and arrays thereof - no opaque values.
//! - At most one of [`LogEvent::time_printed`] / [`LogEvent::ms_diff_printed`]
//!   is ever set by the dispatcher.
//! - Byte rendering never fails: input is `&[u8]`, so every value is already
//!   an unsigned 8-bit quantity.
//!
//! # Examples
//!
//! Render a buffer the way the hex entry point does:
//!
//! ```
//! use termlog_core::BufferRender;
//!
//! let message = BufferRender::Hex.message(&[0x44, 0x41, 0x52, 0x54]);
//! assert_eq!(message, "(4 bytes) 44 41 52 54");
//! ```

pub mod color;
pub mod event;
pub mod kind;
pub mod render;
pub mod sink;

pub use color::{Color, ParseColorError, RESET};
pub use event::LogEvent;
pub use kind::{LogKind, ParseLogKindError};
pub use render::{BufferRender, ParseBufferRenderError};
pub use sink::{Sink, SinkError};
