//! TOML parser for snapshot files
//!
//! A snapshot file carries the whole catalog plus the completion log:
//!
//! ```toml
//! [[category]]
//! id = "weekly-clean"
//! name = "Weekly cleaning"
//! frequency = "weekly"
//! frequency_days = 7
//!
//! [[item]]
//! id = "rollers"
//! category_id = "weekly-clean"
//! name = "Clean rollers"
//! target_type = "machine"
//!
//! [[asset]]
//! id = "m28"
//! name = "Printer 28"
//! number = "28"
//! type = "machine"
//!
//! [[log]]
//! id = "LOG-1"
//! asset_id = "m28"
//! item_id = "rollers"
//! completed_at = "2024-01-05T22:30:00-03:00"
//! performed_by = "ana"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{Asset, Catalog, Category, CompletionEvent, MaintenanceItem};

/// A snapshot file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Categories and their frequency rules
    #[serde(default, rename = "category")]
    pub categories: Vec<Category>,

    /// Maintenance items
    #[serde(default, rename = "item")]
    pub items: Vec<MaintenanceItem>,

    /// Machines and rooms
    #[serde(default, rename = "asset")]
    pub assets: Vec<Asset>,

    /// Completion log
    #[serde(default, rename = "log")]
    pub logs: Vec<CompletionEvent>,
}

impl SnapshotFile {
    /// The catalog part of the snapshot
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog {
            assets: self.assets.clone(),
            categories: self.categories.clone(),
            items: self.items.clone(),
        }
    }
}

/// Parse snapshot content
///
/// # Errors
///
/// Returns an error if the content is not a valid snapshot.
pub fn parse_snapshot(content: &str) -> anyhow::Result<SnapshotFile> {
    let file: SnapshotFile = toml::from_str(content)?;
    Ok(file)
}

/// Load a snapshot file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<SnapshotFile> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read snapshot {}: {e}", path.display()))?;
    parse_snapshot(&content).map_err(|e| anyhow::anyhow!("invalid snapshot {}: {e}", path.display()))
}
