//! Completion ledger port
//!
//! Defines the interface for reading and appending completion events.

use super::super::models::{CompletionEvent, Rating};

/// Append-only store of completion events keyed by (asset, task)
///
/// The core only reads from the ledger; writes exist for the surrounding
/// application. Implementations decide the consistency of what they return.
pub trait CompletionLedger: Send + Sync {
    /// All completion events, in no guaranteed order
    fn events(&self) -> anyhow::Result<Vec<CompletionEvent>>;

    /// Events for one (asset, task) pair
    fn events_for(&self, asset_id: &str, task_id: &str) -> anyhow::Result<Vec<CompletionEvent>> {
        Ok(self
            .events()?
            .into_iter()
            .filter(|e| e.asset_id == asset_id && e.task_id == task_id)
            .collect())
    }

    /// The most recent event for one (asset, task) pair
    ///
    /// Latest `completed_at` wins; equal timestamps go to the greater id.
    fn latest(&self, asset_id: &str, task_id: &str) -> anyhow::Result<Option<CompletionEvent>> {
        Ok(self
            .events_for(asset_id, task_id)?
            .into_iter()
            .reduce(|best, e| if e.is_newer_than(&best) { e } else { best }))
    }

    /// Append a new completion event
    fn record(&self, event: &CompletionEvent) -> anyhow::Result<()>;

    /// Logically delete ("uncheck") an event by id
    fn retract(&self, event_id: &str) -> anyhow::Result<()>;

    /// Set the rating and note on an existing event
    fn annotate(&self, event_id: &str, rating: Option<Rating>, note: Option<String>) -> anyhow::Result<()>;
}
