//! crates/logging/src/error.rs
//! Error type returned by the logging entry points.

use std::fmt;

use termlog_core::SinkError;

/// Failure raised by a logging call.
///
/// Console output never contributes a variant here: channels are best-effort
/// by contract. The two failures a caller can observe are configuration
/// misuse, rejected before any side effect, and a registered sink's handler
/// failing, propagated unmodified.
#[derive(Debug)]
pub enum LogError {
    /// The `time` and `ms_diff` options were requested together. Both control
    /// the message prefix, so the combination signals a programming error at
    /// the call site.
    ConflictingPrefixOptions,
    /// The registered sink's handler failed while processing the event.
    Sink(SinkError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingPrefixOptions => {
                f.write_str("the time and ms_diff options are mutually exclusive")
            }
            Self::Sink(error) => write!(f, "sink handler failed: {error}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConflictingPrefixOptions => None,
            Self::Sink(error) => Some(error.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn conflicting_options_message() {
        let error = LogError::ConflictingPrefixOptions;
        assert_eq!(
            error.to_string(),
            "the time and ms_diff options are mutually exclusive"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn sink_variant_preserves_cause() {
        let cause: SinkError = "disk full".into();
        let error = LogError::Sink(cause);
        assert_eq!(error.to_string(), "sink handler failed: disk full");
        assert_eq!(error.source().expect("source").to_string(), "disk full");
    }
}
