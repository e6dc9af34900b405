//! Domain errors
//!
//! Only genuinely invalid input is an error. Missing completions and
//! missing cutover references are ordinary outcomes and never surface here.

use thiserror::Error;

/// Invalid input to the scheduling core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Frequency name that maps to no known class
    #[error("unknown frequency '{0}' (use: weekly, biweekly, quarterly, semiannual, interval)")]
    UnknownFrequency(String),

    /// Simple interval with a non-positive day count
    #[error("interval must be a positive number of days, got {0}")]
    InvalidInterval(i64),

    /// UTC offset that could not be parsed or is out of range
    #[error("invalid UTC offset '{0}' (expected +HH:MM or -HH:MM)")]
    InvalidOffset(String),

    /// Timestamp that is not valid RFC 3339
    #[error("invalid timestamp '{0}' (expected RFC 3339)")]
    InvalidTimestamp(String),

    /// Unrecognised enumerated value (asset type, target scope, rating)
    #[error("invalid {field}: '{value}'")]
    InvalidValue {
        /// Which field was being parsed
        field: &'static str,
        /// The rejected value
        value: String,
    },
}
