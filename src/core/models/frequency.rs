//! Frequency classes
//!
//! A frequency class says how often a task must be performed. Four classes
//! are calendar-anchored (they reset at fixed Friday 22:00 cutovers); the
//! fifth counts elapsed days since the last completion.

use serde::{Deserialize, Serialize};

use crate::core::error::ScheduleError;

/// Recurrence rule governing how often a task is due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FrequencyClass {
    /// Resets every Friday at 22:00
    Weekly,
    /// Resets the Friday before the 1st and 3rd Saturday of each month
    Biweekly,
    /// Resets the Friday before the 1st Saturday of March, June and November
    Quarterly,
    /// Resets the Friday before the 1st Saturday of February and August
    Semiannual,
    /// Due once more than `days` days have elapsed since the last completion
    SimpleInterval(u32),
}

impl FrequencyClass {
    /// All calendar-anchored classes
    pub const CALENDAR: [Self; 4] = [Self::Weekly, Self::Biweekly, Self::Quarterly, Self::Semiannual];

    /// Build a simple interval, rejecting non-positive day counts
    pub fn simple_interval(days: i64) -> Result<Self, ScheduleError> {
        u32::try_from(days)
            .ok()
            .filter(|d| *d > 0)
            .map(Self::SimpleInterval)
            .ok_or(ScheduleError::InvalidInterval(days))
    }

    /// Resolve a class from a category record's `frequency` name and `frequency_days`
    ///
    /// Calendar names ignore `days` (it is display-only for them). Interval
    /// names use `days` as the interval.
    pub fn from_parts(name: &str, days: i64) -> Result<Self, ScheduleError> {
        match name.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "quarterly" => Ok(Self::Quarterly),
            "semiannual" => Ok(Self::Semiannual),
            "interval" | "days" | "daily" | "monthly" => Self::simple_interval(days),
            other => Err(ScheduleError::UnknownFrequency(other.to_string())),
        }
    }

    /// Whether this class resets at calendar cutovers rather than by elapsed days
    #[must_use]
    pub const fn is_calendar_anchored(self) -> bool {
        !matches!(self, Self::SimpleInterval(_))
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Weekly => "Weekly".to_string(),
            Self::Biweekly => "Biweekly".to_string(),
            Self::Quarterly => "Quarterly".to_string(),
            Self::Semiannual => "Semiannual".to_string(),
            Self::SimpleInterval(1) => "Every day".to_string(),
            Self::SimpleInterval(days) => format!("Every {days} days"),
        }
    }
}

impl std::fmt::Display for FrequencyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Biweekly => write!(f, "biweekly"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Semiannual => write!(f, "semiannual"),
            Self::SimpleInterval(days) => write!(f, "every:{days}"),
        }
    }
}

impl std::str::FromStr for FrequencyClass {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if let Some(days) = s.strip_prefix("every:") {
            let days: i64 = days
                .trim()
                .parse()
                .map_err(|_| ScheduleError::UnknownFrequency(s.clone()))?;
            return Self::simple_interval(days);
        }
        match s.as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "quarterly" => Ok(Self::Quarterly),
            "semiannual" => Ok(Self::Semiannual),
            _ => Err(ScheduleError::UnknownFrequency(s)),
        }
    }
}

impl TryFrom<String> for FrequencyClass {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FrequencyClass> for String {
    fn from(value: FrequencyClass) -> Self {
        value.to_string()
    }
}
