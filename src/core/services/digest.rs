//! Overdue digest
//!
//! Groups the overdue pairs of a [`Report`] by asset, ready to be rendered
//! as an alert listing.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::report::Report;
use crate::core::models::Catalog;

/// One overdue item on an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestEntry {
    /// Item id
    pub task_id: String,
    /// Item name
    pub task_name: String,
    /// Category name
    pub category_name: String,
    /// Latest completion; `None` means never done
    pub last_completed: Option<DateTime<FixedOffset>>,
}

/// Overdue items for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetDigest {
    /// Asset id
    pub asset_id: String,
    /// Dashboard name
    pub asset_name: String,
    /// Overdue items, in report order
    pub entries: Vec<DigestEntry>,
}

/// Group overdue pairs by asset, skipping assets with nothing overdue
#[must_use]
pub fn digest(report: &Report, catalog: &Catalog) -> Vec<AssetDigest> {
    let mut groups: Vec<AssetDigest> = Vec::new();

    for status in report.overdue() {
        let entry = DigestEntry {
            task_id: status.task_id.clone(),
            task_name: catalog
                .item(&status.task_id)
                .map_or_else(|| status.task_id.clone(), |i| i.name.clone()),
            category_name: catalog
                .category(&status.category_id)
                .map_or_else(|| status.category_id.clone(), |c| c.name.clone()),
            last_completed: status.last_completed,
        };

        if let Some(group) = groups.iter_mut().find(|g| g.asset_id == status.asset_id) {
            group.entries.push(entry);
        } else {
            let asset_name = report
                .asset(&status.asset_id)
                .map_or_else(|| status.asset_id.clone(), |a| a.name.clone());
            groups.push(AssetDigest {
                asset_id: status.asset_id.clone(),
                asset_name,
                entries: vec![entry],
            });
        }
    }

    groups
}

/// Total overdue items across a digest
#[must_use]
pub fn overdue_total(groups: &[AssetDigest]) -> usize {
    groups.iter().map(|g| g.entries.len()).sum()
}
