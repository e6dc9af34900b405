//! Categories and maintenance items
//!
//! A category owns the frequency rule; items belong to exactly one category
//! and declare which kinds of asset they apply to.

use serde::{Deserialize, Serialize};

use super::{AssetKind, FrequencyClass};
use crate::core::error::ScheduleError;

/// Which kinds of asset an item applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetScope {
    /// Machines only
    #[default]
    Machine,
    /// Rooms only
    Room,
    /// Every asset
    Both,
}

impl TargetScope {
    /// Whether an item with this scope applies to an asset of `kind`
    #[must_use]
    pub const fn applies_to(self, kind: AssetKind) -> bool {
        matches!(
            (self, kind),
            (Self::Both, _) | (Self::Machine, AssetKind::Machine) | (Self::Room, AssetKind::Room)
        )
    }
}

impl std::fmt::Display for TargetScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Machine => write!(f, "machine"),
            Self::Room => write!(f, "room"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for TargetScope {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "machine" => Ok(Self::Machine),
            "room" => Ok(Self::Room),
            "both" => Ok(Self::Both),
            _ => Err(ScheduleError::InvalidValue {
                field: "target type",
                value: s.to_string(),
            }),
        }
    }
}

/// A group of items sharing one recurrence rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Frequency name: weekly, biweekly, quarterly, semiannual, interval
    pub frequency: String,

    /// Nominal interval in days (display, and the interval for `interval`)
    #[serde(default)]
    pub frequency_days: i64,

    /// Sort key on dashboards
    #[serde(default)]
    pub display_order: i32,
}

impl Category {
    /// Resolve this category's frequency class
    pub fn frequency_class(&self) -> Result<FrequencyClass, ScheduleError> {
        FrequencyClass::from_parts(&self.frequency, self.frequency_days)
    }
}

/// A recurring maintenance action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceItem {
    /// Opaque identifier
    pub id: String,

    /// Owning category
    pub category_id: String,

    /// Display name
    pub name: String,

    /// Sort key within the category
    #[serde(default)]
    pub display_order: i32,

    /// Inactive items are left out of every schedule
    #[serde(default = "default_active")]
    pub active: bool,

    /// Which assets this item applies to
    #[serde(rename = "target_type", default)]
    pub target: TargetScope,
}

const fn default_active() -> bool {
    true
}

impl MaintenanceItem {
    /// Create an active item
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        name: impl Into<String>,
        target: TargetScope,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            display_order: 0,
            active: true,
            target,
        }
    }
}
