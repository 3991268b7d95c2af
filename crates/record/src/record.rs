//! crates/record/src/record.rs
//! The rendered log record handed to sinks.

use crate::detail::Details;
use crate::level::Level;

/// A fully rendered log record, ready for a sink.
///
/// `message` is final: indentation, labels and any styling were applied
/// when the record was built, so sinks write it as-is. `details` keeps the
/// structured companion data for filters and capture sinks.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogRecord {
    /// The rendered message, without a trailing newline.
    pub message: String,
    /// Severity of the record.
    pub level: Level,
    /// Structured companion data.
    pub details: Details,
}

impl LogRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub const fn new(message: String, level: Level, details: Details) -> Self {
        Self {
            message,
            level,
            details,
        }
    }
}
