//! Snapshot-backed ledger and catalog
//!
//! Implements both `CompletionLedger` and `TaskCatalog` over a single
//! snapshot file. Every write reloads the file, applies the change and
//! writes it back; there is no cross-process locking.

use std::path::{Path, PathBuf};

use crate::core::models::{Asset, Catalog, Category, CompletionEvent, MaintenanceItem, Rating};
use crate::core::ports::{CompletionLedger, TaskCatalog};

use super::parser::{SnapshotFile, load_file};
use super::writer::save_file;

/// Ledger and catalog backed by a snapshot file
#[derive(Debug, Clone)]
pub struct TomlSnapshot {
    path: PathBuf,
}

impl TomlSnapshot {
    /// Open the snapshot at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the underlying file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> anyhow::Result<SnapshotFile> {
        load_file(&self.path)
    }

    fn modify(
        &self,
        change: impl FnOnce(&mut SnapshotFile) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let mut file = self.load()?;
        change(&mut file)?;
        save_file(&self.path, &file)?;
        log::debug!("wrote snapshot {}", self.path.display());
        Ok(())
    }
}

impl TaskCatalog for TomlSnapshot {
    fn assets(&self) -> anyhow::Result<Vec<Asset>> {
        Ok(self.load()?.assets)
    }

    fn categories(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.load()?.categories)
    }

    fn items(&self) -> anyhow::Result<Vec<MaintenanceItem>> {
        Ok(self.load()?.items)
    }

    fn catalog(&self) -> anyhow::Result<Catalog> {
        Ok(self.load()?.catalog())
    }
}

impl CompletionLedger for TomlSnapshot {
    fn events(&self) -> anyhow::Result<Vec<CompletionEvent>> {
        Ok(self.load()?.logs)
    }

    fn record(&self, event: &CompletionEvent) -> anyhow::Result<()> {
        self.modify(|file| {
            if file.logs.iter().any(|l| l.id == event.id) {
                anyhow::bail!("Completion already exists: {}", event.id);
            }
            file.logs.push(event.clone());
            Ok(())
        })
    }

    fn retract(&self, event_id: &str) -> anyhow::Result<()> {
        self.modify(|file| {
            let before = file.logs.len();
            file.logs.retain(|l| l.id != event_id);
            if file.logs.len() == before {
                anyhow::bail!("Completion not found: {event_id}");
            }
            Ok(())
        })
    }

    fn annotate(
        &self,
        event_id: &str,
        rating: Option<Rating>,
        note: Option<String>,
    ) -> anyhow::Result<()> {
        self.modify(|file| {
            let Some(event) = file.logs.iter_mut().find(|l| l.id == event_id) else {
                anyhow::bail!("Completion not found: {event_id}");
            };
            event.annotate(rating, note);
            Ok(())
        })
    }
}
