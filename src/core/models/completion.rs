//! Completion events
//!
//! A completion event records that a task was performed on an asset. Events
//! are immutable apart from the after-the-fact rating and note.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::error::ScheduleError;

/// Quality rating attached to a completion after the fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Work needs redoing
    Poor,
    /// Acceptable
    Good,
    /// Exemplary
    Excellent,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poor => write!(f, "poor"),
            Self::Good => write!(f, "good"),
            Self::Excellent => write!(f, "excellent"),
        }
    }
}

impl std::str::FromStr for Rating {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poor" => Ok(Self::Poor),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            _ => Err(ScheduleError::InvalidValue {
                field: "rating",
                value: s.to_string(),
            }),
        }
    }
}

/// A timestamped record that a task was performed on an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Unique identifier; also the tie-breaker between equal timestamps
    pub id: String,

    /// The asset the work was done on
    pub asset_id: String,

    /// The maintenance item performed
    #[serde(rename = "item_id")]
    pub task_id: String,

    /// When the work was completed
    pub completed_at: DateTime<FixedOffset>,

    /// Who performed it
    #[serde(default)]
    pub performed_by: String,

    /// Optional quality rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CompletionEvent {
    /// Create an unannotated completion event
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        asset_id: impl Into<String>,
        task_id: impl Into<String>,
        completed_at: DateTime<FixedOffset>,
        performed_by: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            asset_id: asset_id.into(),
            task_id: task_id.into(),
            completed_at,
            performed_by: performed_by.into(),
            rating: None,
            note: None,
        }
    }

    /// Attach a rating and note; the only mutation an event allows
    pub fn annotate(&mut self, rating: Option<Rating>, note: Option<String>) {
        self.rating = rating;
        self.note = note;
    }

    /// Whether this event supersedes `other` as the latest for its pair
    ///
    /// Later `completed_at` wins; equal timestamps fall back to the greater id.
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        (self.completed_at, &self.id) > (other.completed_at, &other.id)
    }
}
