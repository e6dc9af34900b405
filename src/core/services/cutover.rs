//! Cutover instants for calendar-anchored frequencies
//!
//! A cutover is the moment a new maintenance cycle begins: any completion
//! before it is stale, any completion at or after it is current. Every
//! cutover falls on a Friday at 22:00 local time, where "local" is the time
//! zone carried by the `now` value.
//!
//! | Class      | Cutover Fridays                                          |
//! |------------|----------------------------------------------------------|
//! | Weekly     | every Friday                                             |
//! | Biweekly   | the day before the 1st and 3rd Saturday of each month    |
//! | Quarterly  | the day before the 1st Saturday of March, June, November |
//! | Semiannual | the day before the 1st Saturday of February and August   |
//!
//! The Friday before a 1st Saturday falling on the 1st lies in the previous
//! month (Sat 2025-02-01 cuts over on Fri 2025-01-31).

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeZone, Weekday};

use crate::core::models::FrequencyClass;

/// Local hour at which every cutover happens
pub const CUTOVER_HOUR: u32 = 22;

const QUARTERLY_MONTHS: [u32; 3] = [3, 6, 11];
const SEMIANNUAL_MONTHS: [u32; 2] = [2, 8];

/// Most recent cutover at or before `now`
///
/// Returns `None` for [`FrequencyClass::SimpleInterval`], which has no
/// cutovers, and when no candidate precedes `now`. Callers must treat `None`
/// as "overdue".
#[must_use]
pub fn reference_instant<Tz: TimeZone>(
    frequency: FrequencyClass,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    candidates(frequency, now).into_iter().filter(|c| c <= now).max()
}

/// Earliest cutover strictly after `now`
///
/// Display only; the overdue decision never looks forward.
#[must_use]
pub fn next_cutover<Tz: TimeZone>(
    frequency: FrequencyClass,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    candidates(frequency, now).into_iter().filter(|c| c > now).min()
}

/// Candidate cutover instants around `now`, in no particular order
fn candidates<Tz: TimeZone>(frequency: FrequencyClass, now: &DateTime<Tz>) -> Vec<DateTime<Tz>> {
    let tz = now.timezone();
    cutover_dates(frequency, now.date_naive())
        .into_iter()
        .filter_map(|date| at_cutover_hour(&tz, date))
        .collect()
}

/// Cutover Fridays in a window wide enough to bracket `today` on both sides
fn cutover_dates(frequency: FrequencyClass, today: NaiveDate) -> Vec<NaiveDate> {
    match frequency {
        FrequencyClass::Weekly => weekly_dates(today),
        FrequencyClass::Biweekly => biweekly_dates(today),
        FrequencyClass::Quarterly => yearly_dates(today, &QUARTERLY_MONTHS),
        FrequencyClass::Semiannual => yearly_dates(today, &SEMIANNUAL_MONTHS),
        FrequencyClass::SimpleInterval(_) => Vec::new(),
    }
}

fn weekly_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let since_friday = (today.weekday().num_days_from_monday() + 7
        - Weekday::Fri.num_days_from_monday())
        % 7;
    let Some(friday) = today.checked_sub_days(Days::new(u64::from(since_friday))) else {
        return Vec::new();
    };
    [friday.checked_sub_days(Days::new(7)), Some(friday), friday.checked_add_days(Days::new(7))]
        .into_iter()
        .flatten()
        .collect()
}

// Previous, current and next month: the next month's 1st Saturday can be
// preceded by a Friday in the current month.
fn biweekly_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let Some(first) = today.with_day(1) else {
        return Vec::new();
    };
    [first.checked_sub_months(Months::new(1)), Some(first), first.checked_add_months(Months::new(1))]
        .into_iter()
        .flatten()
        .flat_map(|month| [nth_saturday(month, 1), nth_saturday(month, 3)])
        .flatten()
        .filter_map(|saturday| saturday.pred_opt())
        .collect()
}

// Previous, current and next year for each target month.
fn yearly_dates(today: NaiveDate, months: &[u32]) -> Vec<NaiveDate> {
    let year = today.year();
    (year - 1..=year + 1)
        .flat_map(|y| months.iter().map(move |&m| NaiveDate::from_ymd_opt(y, m, 1)))
        .flatten()
        .filter_map(|month| nth_saturday(month, 1))
        .filter_map(|saturday| saturday.pred_opt())
        .collect()
}

/// The `n`th Saturday (1-based) of the month starting at `first`
fn nth_saturday(first: NaiveDate, n: u32) -> Option<NaiveDate> {
    let offset = (Weekday::Sat.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    first.checked_add_days(Days::new(u64::from(offset + 7 * (n - 1))))
}

/// `date` at 22:00 in `tz`; `None` when that wall-clock time does not exist
fn at_cutover_hour<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(CUTOVER_HOUR, 0, 0)?;
    tz.from_local_datetime(&date.and_time(time)).earliest()
}
