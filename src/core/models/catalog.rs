//! Catalog snapshot
//!
//! The read-only view of assets, categories and items the reporter works
//! over. Callers obtain it from a [`TaskCatalog`](crate::core::ports::TaskCatalog).

use serde::{Deserialize, Serialize};

use super::{Asset, Category, MaintenanceItem};

/// Assets, categories and items as of one read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Machines and rooms
    #[serde(default, rename = "asset")]
    pub assets: Vec<Asset>,

    /// Categories owning the frequency rules
    #[serde(default, rename = "category")]
    pub categories: Vec<Category>,

    /// Maintenance items
    #[serde(default, rename = "item")]
    pub items: Vec<MaintenanceItem>,
}

impl Catalog {
    /// Look up an asset by id
    #[must_use]
    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up an item by id
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&MaintenanceItem> {
        self.items.iter().find(|i| i.id == id)
    }
}
