//! Overdue evaluation
//!
//! Pure, point-in-time decision: is this task overdue right now? "Now" is
//! always a parameter so that calendar boundaries can be tested exactly.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::cutover::reference_instant;
use crate::core::models::FrequencyClass;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whether a task last completed at `last` is overdue at `now`
///
/// - Never completed: always overdue.
/// - Simple interval: overdue once strictly more than `days` have elapsed.
/// - Calendar classes: overdue when the completion precedes the most recent
///   cutover. A completion exactly at the cutover is current. A missing
///   cutover counts as overdue.
///
/// A completion later than `now` (clock skew) is never overdue.
#[must_use]
pub fn is_overdue<Tz1, Tz2>(
    last: Option<&DateTime<Tz1>>,
    frequency: FrequencyClass,
    now: &DateTime<Tz2>,
) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let Some(last) = last else {
        return true;
    };

    match frequency {
        FrequencyClass::SimpleInterval(days) => elapsed_days(last, now) > f64::from(days),
        _ => reference_instant(frequency, now).is_none_or(|reference| *last < reference),
    }
}

/// Fractional days between `last` and `now`; negative if `last` is later
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elapsed_days<Tz1: TimeZone, Tz2: TimeZone>(last: &DateTime<Tz1>, now: &DateTime<Tz2>) -> f64 {
    let millis = now.timestamp_millis() - last.timestamp_millis();
    millis as f64 / MILLIS_PER_DAY
}

/// Whole days left before the nominal interval runs out, rounded up
///
/// Uses the elapsed-day formula for every class, including calendar-anchored
/// ones, where it only approximates the time to the next cutover.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn days_remaining<Tz1: TimeZone, Tz2: TimeZone>(
    last: &DateTime<Tz1>,
    nominal_interval_days: i64,
    now: &DateTime<Tz2>,
) -> i64 {
    #[allow(clippy::cast_precision_loss)]
    let nominal = nominal_interval_days as f64;
    (nominal - elapsed_days(last, now)).ceil() as i64
}

/// One task's recurrence rule plus its nominal interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cadence {
    /// The recurrence rule
    pub frequency: FrequencyClass,
    /// Nominal interval in days, for display and the days-remaining message
    pub nominal_interval_days: i64,
}

impl Cadence {
    /// Bundle a frequency with its nominal interval
    #[must_use]
    pub const fn new(frequency: FrequencyClass, nominal_interval_days: i64) -> Self {
        Self {
            frequency,
            nominal_interval_days,
        }
    }

    /// See [`is_overdue`]
    #[must_use]
    pub fn is_overdue<Tz1: TimeZone, Tz2: TimeZone>(
        &self,
        last: Option<&DateTime<Tz1>>,
        now: &DateTime<Tz2>,
    ) -> bool {
        is_overdue(last, self.frequency, now)
    }

    /// See [`days_remaining`]
    #[must_use]
    pub fn days_remaining<Tz1: TimeZone, Tz2: TimeZone>(
        &self,
        last: &DateTime<Tz1>,
        now: &DateTime<Tz2>,
    ) -> i64 {
        days_remaining(last, self.nominal_interval_days, now)
    }
}

/// Full evaluation of one (asset, task) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<Tz: TimeZone> {
    /// Whether the task is overdue
    pub overdue: bool,
    /// Days left in the nominal interval; `None` when never completed
    pub days_remaining: Option<i64>,
    /// The cutover the decision was made against, for calendar classes
    pub reference: Option<DateTime<Tz>>,
}

/// Evaluate one pair: the overdue flag plus the values shown alongside it
#[must_use]
pub fn evaluate<Tz1: TimeZone, Tz2: TimeZone>(
    last: Option<&DateTime<Tz1>>,
    cadence: Cadence,
    now: &DateTime<Tz2>,
) -> Evaluation<Tz2> {
    Evaluation {
        overdue: cadence.is_overdue(last, now),
        days_remaining: last.map(|l| cadence.days_remaining(l, now)),
        reference: reference_instant(cadence.frequency, now),
    }
}
