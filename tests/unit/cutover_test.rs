//! Tests for cutover derivation across every calendar class

use chrono::{Datelike, Timelike, Weekday};
use upkeep::core::models::FrequencyClass;
use upkeep::core::services::{CUTOVER_HOUR, next_cutover, reference_instant};

use crate::common::fixtures::{at, at_offset};

// =============================================================================
// WEEKLY
// =============================================================================

#[test]
fn test_weekly_midweek_points_at_last_friday() {
    let now = at(2024, 1, 10, 12, 0);
    assert_eq!(reference_instant(FrequencyClass::Weekly, &now), Some(at(2024, 1, 5, 22, 0)));
}

#[test]
fn test_weekly_friday_before_cutover_uses_previous_week() {
    let now = at(2024, 1, 5, 21, 59);
    assert_eq!(reference_instant(FrequencyClass::Weekly, &now), Some(at(2023, 12, 29, 22, 0)));
}

#[test]
fn test_weekly_saturday_uses_yesterday() {
    let now = at(2024, 1, 6, 3, 0);
    assert_eq!(reference_instant(FrequencyClass::Weekly, &now), Some(at(2024, 1, 5, 22, 0)));
}

// =============================================================================
// BIWEEKLY
// =============================================================================

#[test]
fn test_biweekly_after_third_saturday_friday() {
    // 3rd Saturday of March 2024 is the 16th
    let now = at(2024, 3, 20, 12, 0);
    assert_eq!(reference_instant(FrequencyClass::Biweekly, &now), Some(at(2024, 3, 15, 22, 0)));
}

#[test]
fn test_biweekly_between_first_and_third() {
    // 1st Saturday of March 2024 is the 2nd
    let now = at(2024, 3, 10, 12, 0);
    assert_eq!(reference_instant(FrequencyClass::Biweekly, &now), Some(at(2024, 3, 1, 22, 0)));
}

#[test]
fn test_biweekly_reaches_back_into_previous_month() {
    let now = at(2024, 3, 1, 21, 0);
    assert_eq!(reference_instant(FrequencyClass::Biweekly, &now), Some(at(2024, 2, 16, 22, 0)));
}

#[test]
fn test_biweekly_next_month_friday_falls_in_current_month() {
    // Sat 2025-02-01 is February's 1st Saturday
    let after = at(2025, 1, 31, 23, 0);
    assert_eq!(reference_instant(FrequencyClass::Biweekly, &after), Some(at(2025, 1, 31, 22, 0)));

    let before = at(2025, 1, 31, 21, 0);
    assert_eq!(reference_instant(FrequencyClass::Biweekly, &before), Some(at(2025, 1, 17, 22, 0)));
    assert_eq!(next_cutover(FrequencyClass::Biweekly, &before), Some(at(2025, 1, 31, 22, 0)));
}

// =============================================================================
// QUARTERLY AND SEMIANNUAL
// =============================================================================

#[test]
fn test_quarterly_january_points_at_previous_november() {
    let now = at(2024, 1, 10, 12, 0);
    assert_eq!(reference_instant(FrequencyClass::Quarterly, &now), Some(at(2023, 11, 3, 22, 0)));
}

#[test]
fn test_quarterly_june_starting_on_saturday_cuts_over_in_may() {
    let now = at(2024, 6, 15, 12, 0);
    assert_eq!(reference_instant(FrequencyClass::Quarterly, &now), Some(at(2024, 5, 31, 22, 0)));

    let before = at(2024, 5, 31, 21, 0);
    assert_eq!(reference_instant(FrequencyClass::Quarterly, &before), Some(at(2024, 3, 1, 22, 0)));
}

#[test]
fn test_semiannual_wraps_to_previous_year() {
    let now = at(2024, 1, 15, 12, 0);
    assert_eq!(reference_instant(FrequencyClass::Semiannual, &now), Some(at(2023, 8, 4, 22, 0)));
}

#[test]
fn test_semiannual_after_february() {
    let now = at(2024, 5, 1, 12, 0);
    assert_eq!(reference_instant(FrequencyClass::Semiannual, &now), Some(at(2024, 2, 2, 22, 0)));
    assert_eq!(next_cutover(FrequencyClass::Semiannual, &now), Some(at(2024, 8, 2, 22, 0)));
}

// =============================================================================
// LOCAL ZONE
// =============================================================================

#[test]
fn test_cutover_uses_zone_of_now() {
    // Same instant: 21:30 on Friday in -03:00, already Saturday in UTC
    let local = at_offset(-3, 2024, 1, 5, 21, 30);
    let utc = at(2024, 1, 6, 0, 30);
    assert_eq!(local, utc);

    assert_eq!(
        reference_instant(FrequencyClass::Weekly, &local),
        Some(at_offset(-3, 2023, 12, 29, 22, 0))
    );
    assert_eq!(reference_instant(FrequencyClass::Weekly, &utc), Some(at(2024, 1, 5, 22, 0)));
}

#[test]
fn test_reference_keeps_offset_of_now() {
    let now = at_offset(-3, 2024, 1, 10, 12, 0);
    let reference = reference_instant(FrequencyClass::Weekly, &now).unwrap();
    assert_eq!(reference.offset(), now.offset());
    assert_eq!(reference.hour(), CUTOVER_HOUR);
    assert_eq!(reference.weekday(), Weekday::Fri);
}

#[test]
fn test_next_cutover_is_after_reference() {
    let now = at(2024, 1, 10, 12, 0);
    for frequency in FrequencyClass::CALENDAR {
        let reference = reference_instant(frequency, &now).unwrap();
        let next = next_cutover(frequency, &now).unwrap();
        assert!(reference <= now && now < next, "{frequency}: {reference} {next}");
    }
}
