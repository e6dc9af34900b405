//! Offset and instant parsing
//!
//! The engine evaluates in the local zone of the `now` it is handed. These
//! helpers build that `now` from user input.

use chrono::{DateTime, FixedOffset, Utc};

use super::error::ScheduleError;

/// Parse a UTC offset: `Z`, `UTC`, `+HH:MM`, `-HH:MM` or `+HHMM`
pub fn parse_offset(s: &str) -> Result<FixedOffset, ScheduleError> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| ScheduleError::InvalidOffset(s.to_string()));
    }

    let invalid = || ScheduleError::InvalidOffset(s.to_string());
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parse an RFC 3339 instant and view it in `offset`
pub fn parse_instant(s: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>, ScheduleError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&offset))
        .map_err(|_| ScheduleError::InvalidTimestamp(s.to_string()))
}

/// The wall clock, viewed in `offset`
#[must_use]
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}
