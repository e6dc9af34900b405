//! Aggregation of overdue results for dashboards
//!
//! Builds a "latest completion per (asset, task)" index in one pass over the
//! completion events, applies the overdue evaluator to every pair in scope
//! and rolls the results up globally, per asset and per category.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;

use super::overdue::{Cadence, evaluate};
use crate::core::models::{Catalog, CompletionEvent, FrequencyClass, MaintenanceItem};

/// Most recent completion per (asset, task) pair
///
/// Input order does not matter: the latest `completed_at` wins, and equal
/// timestamps are resolved by the greater event id.
#[derive(Debug, Clone, Default)]
pub struct LatestIndex {
    latest: HashMap<(String, String), CompletionEvent>,
}

impl LatestIndex {
    /// Index a set of completion events
    #[must_use]
    pub fn build<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a CompletionEvent>,
    {
        let mut latest: HashMap<(String, String), CompletionEvent> = HashMap::new();
        for event in events {
            let key = (event.asset_id.clone(), event.task_id.clone());
            match latest.get(&key) {
                Some(current) if !event.is_newer_than(current) => {},
                _ => {
                    latest.insert(key, event.clone());
                },
            }
        }
        Self { latest }
    }

    /// Latest event for a pair
    #[must_use]
    pub fn get(&self, asset_id: &str, task_id: &str) -> Option<&CompletionEvent> {
        self.latest.get(&(asset_id.to_string(), task_id.to_string()))
    }

    /// Latest completion instant for a pair
    #[must_use]
    pub fn completed_at(&self, asset_id: &str, task_id: &str) -> Option<&DateTime<FixedOffset>> {
        self.get(asset_id, task_id).map(|e| &e.completed_at)
    }

    /// Number of pairs with at least one completion
    #[must_use]
    pub fn len(&self) -> usize {
        self.latest.len()
    }

    /// Whether no pair has been completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}

/// Index completion events by pair; see [`LatestIndex`]
#[must_use]
pub fn latest_completions<'a, I>(events: I) -> LatestIndex
where
    I: IntoIterator<Item = &'a CompletionEvent>,
{
    LatestIndex::build(events)
}

/// Completion counts and percentages for a group of pairs
///
/// An empty group reports 100% for both percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Pairs that are current
    pub completed_count: usize,
    /// Pairs in the group
    pub total_count: usize,
    /// `round(100 * completed / total)`
    pub percent_complete: u32,
    /// Pairs that are overdue
    pub overdue_count: usize,
    /// `round(100 * (total - overdue) / total)`
    pub efficiency: u32,
}

impl Summary {
    /// Summarise `total` pairs of which `overdue` are overdue
    #[must_use]
    pub fn from_counts(total: usize, overdue: usize) -> Self {
        let overdue = overdue.min(total);
        let completed = total - overdue;
        Self {
            completed_count: completed,
            total_count: total,
            percent_complete: percent(completed, total),
            overdue_count: overdue,
            efficiency: percent(total - overdue, total),
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::from_counts(0, 0)
    }
}

/// `round(100 * part / total)` with halves rounded up; 100 for an empty total
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let rounded = (200 * part + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

/// One (asset, task) pair the schedule applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledPair {
    /// The asset
    pub asset_id: String,
    /// The maintenance item
    pub task_id: String,
    /// The item's category
    pub category_id: String,
    /// The category's recurrence rule
    pub cadence: Cadence,
}

/// An item left out of aggregation because its rule could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataGap {
    /// The affected item
    pub task_id: String,
    /// The category it references
    pub category_id: String,
    /// What is wrong
    pub reason: String,
}

/// Pairs in scope plus the items excluded as data gaps
#[derive(Debug, Clone, Default)]
pub struct Scope {
    /// Pairs to evaluate, ordered by asset then category and item order
    pub pairs: Vec<ScheduledPair>,
    /// Items excluded because their category or frequency is unusable
    pub gaps: Vec<DataGap>,
}

/// Every active (asset, item) pair whose target scope matches the asset kind
///
/// Items with a dangling category or malformed frequency are reported as
/// gaps rather than failing the whole scope.
#[must_use]
pub fn pairs_in_scope(catalog: &Catalog) -> Scope {
    let mut items: Vec<&MaintenanceItem> = catalog.items.iter().filter(|i| i.active).collect();
    items.sort_by_key(|i| {
        let category_order = catalog.category(&i.category_id).map_or(i32::MAX, |c| c.display_order);
        (category_order, i.display_order)
    });

    let mut gaps = Vec::new();
    let mut resolved = Vec::new();
    for item in items {
        let Some(category) = catalog.category(&item.category_id) else {
            gaps.push(DataGap {
                task_id: item.id.clone(),
                category_id: item.category_id.clone(),
                reason: "category not found".to_string(),
            });
            continue;
        };
        match category.frequency_class() {
            Ok(frequency) => resolved.push((item, Cadence::new(frequency, category.frequency_days))),
            Err(e) => gaps.push(DataGap {
                task_id: item.id.clone(),
                category_id: item.category_id.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let pairs = catalog
        .assets
        .iter()
        .filter(|a| a.active)
        .flat_map(|asset| {
            resolved
                .iter()
                .filter(move |(item, _)| item.target.applies_to(asset.kind))
                .map(move |(item, cadence)| ScheduledPair {
                    asset_id: asset.id.clone(),
                    task_id: item.id.clone(),
                    category_id: item.category_id.clone(),
                    cadence: *cadence,
                })
        })
        .collect();

    Scope { pairs, gaps }
}

/// Count overdue pairs at `now`
#[must_use]
pub fn aggregate<Tz: TimeZone>(pairs: &[ScheduledPair], index: &LatestIndex, now: &DateTime<Tz>) -> Summary {
    let overdue = pairs
        .iter()
        .filter(|p| p.cadence.is_overdue(index.completed_at(&p.asset_id, &p.task_id), now))
        .count();
    Summary::from_counts(pairs.len(), overdue)
}

/// Evaluated status of one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairStatus {
    /// The asset
    pub asset_id: String,
    /// The maintenance item
    pub task_id: String,
    /// The item's category
    pub category_id: String,
    /// Whether the pair is overdue
    pub overdue: bool,
    /// The latest completion, if any
    pub last_completed: Option<DateTime<FixedOffset>>,
    /// Days left in the nominal interval, if ever completed
    pub days_remaining: Option<i64>,
}

/// Progress of one category on one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    /// Category id
    pub category_id: String,
    /// Category name
    pub name: String,
    /// Category rule
    pub frequency: FrequencyClass,
    /// Counts over the category's items on this asset
    pub summary: Summary,
}

/// Summary for one asset with its per-category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    /// Asset id
    pub asset_id: String,
    /// Dashboard name
    pub name: String,
    /// Counts over every pair on this asset
    pub summary: Summary,
    /// Per-category progress, in category display order
    pub categories: Vec<CategoryProgress>,
}

/// Dashboard roll-up at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Counts over every pair in scope
    pub summary: Summary,
    /// Per-asset breakdown, in catalog order
    pub assets: Vec<AssetReport>,
    /// Every evaluated pair
    pub pairs: Vec<PairStatus>,
    /// Items excluded from the report
    pub gaps: Vec<DataGap>,
}

impl Report {
    /// Evaluate every pair in scope and roll the results up
    #[must_use]
    pub fn build<Tz: TimeZone>(catalog: &Catalog, index: &LatestIndex, now: &DateTime<Tz>) -> Self {
        let scope = pairs_in_scope(catalog);

        let pairs: Vec<PairStatus> = scope
            .pairs
            .iter()
            .map(|pair| {
                let last = index.completed_at(&pair.asset_id, &pair.task_id);
                let eval = evaluate(last, pair.cadence, now);
                PairStatus {
                    asset_id: pair.asset_id.clone(),
                    task_id: pair.task_id.clone(),
                    category_id: pair.category_id.clone(),
                    overdue: eval.overdue,
                    last_completed: last.copied(),
                    days_remaining: eval.days_remaining,
                }
            })
            .collect();

        let summary = summarize(pairs.iter());

        let assets = catalog
            .assets
            .iter()
            .filter(|a| a.active)
            .map(|asset| {
                let on_asset: Vec<&PairStatus> = pairs.iter().filter(|p| p.asset_id == asset.id).collect();

                let mut category_ids: Vec<&str> = Vec::new();
                for p in &on_asset {
                    if !category_ids.contains(&p.category_id.as_str()) {
                        category_ids.push(&p.category_id);
                    }
                }

                let categories = category_ids
                    .into_iter()
                    .filter_map(|id| {
                        let category = catalog.category(id)?;
                        let frequency = category.frequency_class().ok()?;
                        Some(CategoryProgress {
                            category_id: category.id.clone(),
                            name: category.name.clone(),
                            frequency,
                            summary: summarize(on_asset.iter().copied().filter(|p| p.category_id == id)),
                        })
                    })
                    .collect();

                AssetReport {
                    asset_id: asset.id.clone(),
                    name: asset.display_name(),
                    summary: summarize(on_asset.iter().copied()),
                    categories,
                }
            })
            .collect();

        Self {
            summary,
            assets,
            pairs,
            gaps: scope.gaps,
        }
    }

    /// Overdue pairs, in report order
    pub fn overdue(&self) -> impl Iterator<Item = &PairStatus> {
        self.pairs.iter().filter(|p| p.overdue)
    }

    /// The breakdown for one asset
    #[must_use]
    pub fn asset(&self, asset_id: &str) -> Option<&AssetReport> {
        self.assets.iter().find(|a| a.asset_id == asset_id)
    }
}

fn summarize<'a>(statuses: impl Iterator<Item = &'a PairStatus>) -> Summary {
    let (total, overdue) = statuses.fold((0, 0), |(total, overdue), s| {
        (total + 1, overdue + usize::from(s.overdue))
    });
    Summary::from_counts(total, overdue)
}
