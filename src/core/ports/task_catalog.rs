//! Task catalog port
//!
//! Defines the read-only interface for assets, categories and items.

use super::super::models::{Asset, Catalog, Category, MaintenanceItem};

/// Read-only source of the maintenance catalog
pub trait TaskCatalog: Send + Sync {
    /// All assets, active or not
    fn assets(&self) -> anyhow::Result<Vec<Asset>>;

    /// All categories
    fn categories(&self) -> anyhow::Result<Vec<Category>>;

    /// All maintenance items, active or not
    fn items(&self) -> anyhow::Result<Vec<MaintenanceItem>>;

    /// Everything at once, as a [`Catalog`] snapshot
    fn catalog(&self) -> anyhow::Result<Catalog> {
        Ok(Catalog {
            assets: self.assets()?,
            categories: self.categories()?,
            items: self.items()?,
        })
    }
}
