//! Domain models for upkeep
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`FrequencyClass`] - How often a task must be performed
//! - [`Asset`] - A machine or room subject to maintenance
//! - [`Category`] / [`MaintenanceItem`] - The task catalog
//! - [`CompletionEvent`] - "This task was done on this asset at this time"
//! - [`Catalog`] - Snapshot of assets, categories and items

mod asset;
mod catalog;
mod completion;
mod frequency;
mod item;

pub use asset::{Asset, AssetKind};
pub use catalog::Catalog;
pub use completion::{CompletionEvent, Rating};
pub use frequency::FrequencyClass;
pub use item::{Category, MaintenanceItem, TargetScope};
