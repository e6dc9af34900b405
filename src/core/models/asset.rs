//! Asset model
//!
//! An asset is a machine or a room that maintenance tasks apply to.

use serde::{Deserialize, Serialize};

use crate::core::error::ScheduleError;

/// Discrete asset type used to filter which tasks apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A production machine
    #[default]
    Machine,
    /// A room or shared area
    Room,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Machine => write!(f, "machine"),
            Self::Room => write!(f, "room"),
        }
    }
}

impl std::str::FromStr for AssetKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "machine" => Ok(Self::Machine),
            "room" => Ok(Self::Room),
            _ => Err(ScheduleError::InvalidValue {
                field: "asset type",
                value: s.to_string(),
            }),
        }
    }
}

/// A machine or room subject to maintenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Opaque identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Plant number (e.g. "28"); non-numeric for named areas
    #[serde(default)]
    pub number: String,

    /// Machine or room
    #[serde(rename = "type", default)]
    pub kind: AssetKind,

    /// Inactive assets are left out of every schedule
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Asset {
    /// Create an active asset
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number: impl Into<String>,
        kind: AssetKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
            kind,
            active: true,
        }
    }

    /// Name shown on dashboards
    ///
    /// Rooms and assets with a non-numeric number use their name; numbered
    /// machines are shown as "Machine N".
    #[must_use]
    pub fn display_name(&self) -> String {
        let numeric = !self.number.is_empty() && self.number.chars().all(|c| c.is_ascii_digit());
        if self.kind == AssetKind::Room || !numeric {
            self.name.clone()
        } else {
            format!("Machine {}", self.number)
        }
    }
}
