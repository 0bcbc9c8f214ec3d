//! crates/logging/src/clock.rs
//! Wall-clock formatting and the shared last-log diff tracker.

use std::time::Instant;

use chrono::{DateTime, Local};

/// Formats a local instant as zero-padded 24-hour `HH:mm:ss`.
#[must_use]
pub fn hhmmss(instant: &DateTime<Local>) -> String {
    instant.format("%H:%M:%S").to_string()
}

/// Tracks the instant of the previous latency-mode log call.
///
/// The tracker is shared across every caller of one logger, not segmented by
/// channel name: the delta measures absolute elapsed time between ANY two
/// latency-mode calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiffTracker {
    last: Option<Instant>,
}

impl DiffTracker {
    /// Creates a tracker with no recorded instant.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns the millisecond delta since the previously recorded instant
    /// (0.0 if none) and records `now` in its place.
    pub fn record_and_diff(&mut self, now: Instant) -> f64 {
        let delta = self.last.map_or(0.0, |last| {
            now.saturating_duration_since(last).as_secs_f64() * 1000.0
        });
        self.last = Some(now);
        delta
    }
}

/// Formats a millisecond delta for the latency prefix.
///
/// Deltas of a second or more render as seconds with three decimals
/// (`+1.500s`); anything shorter renders as milliseconds with two decimals
/// (`+12.34ms`).
///
/// # Examples
///
/// ```
/// use termlog::clock::format_elapsed;
///
/// assert_eq!(format_elapsed(0.0), "+0.00ms");
/// assert_eq!(format_elapsed(1500.0), "+1.500s");
/// ```
#[must_use]
pub fn format_elapsed(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("+{:.3}s", ms / 1000.0)
    } else {
        format!("+{ms:.2}ms")
    }
}
