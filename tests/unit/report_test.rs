//! Tests for the latest-completion index, scoping and dashboard roll-up

use upkeep::core::models::{Catalog, CompletionEvent, FrequencyClass};
use upkeep::core::services::{
    LatestIndex, Report, Summary, aggregate, digest, overdue_total, pairs_in_scope,
};

use crate::common::fixtures::{CategoryBuilder, EventBuilder, ItemBuilder, at, sample_catalog};

fn sample_events() -> Vec<CompletionEvent> {
    vec![
        // After the Jan 5 cutover: current
        EventBuilder::new("m1", "rollers").id("LOG-1").at(at(2024, 1, 6, 9, 0)).build(),
        // 5.5 days into a 10-day interval: current
        EventBuilder::new("m1", "bearings").id("LOG-2").at(at(2024, 1, 5, 0, 0)).build(),
        // Before the Jan 5 cutover: overdue
        EventBuilder::new("r1", "floor").id("LOG-3").at(at(2024, 1, 2, 8, 0)).build(),
    ]
}

// =============================================================================
// LATEST INDEX
// =============================================================================

#[test]
fn test_index_keeps_latest_per_pair() {
    let events = vec![
        EventBuilder::new("m1", "rollers").id("LOG-1").at(at(2024, 1, 1, 0, 0)).build(),
        EventBuilder::new("m1", "rollers").id("LOG-2").at(at(2024, 1, 8, 0, 0)).build(),
        EventBuilder::new("m1", "floor").id("LOG-3").at(at(2024, 1, 3, 0, 0)).build(),
    ];
    let index = LatestIndex::build(&events);

    assert_eq!(index.len(), 2);
    assert_eq!(index.get("m1", "rollers").unwrap().id, "LOG-2");
    assert_eq!(index.completed_at("m1", "floor"), Some(&at(2024, 1, 3, 0, 0)));
    assert!(index.get("r1", "floor").is_none());
}

#[test]
fn test_index_ignores_input_order() {
    let mut events = sample_events();
    events.push(EventBuilder::new("m1", "rollers").id("LOG-4").at(at(2023, 12, 1, 0, 0)).build());
    let forward = LatestIndex::build(&events);
    events.reverse();
    let backward = LatestIndex::build(&events);

    for (asset, task) in [("m1", "rollers"), ("m1", "bearings"), ("r1", "floor")] {
        assert_eq!(forward.get(asset, task), backward.get(asset, task));
    }
}

#[test]
fn test_index_equal_timestamps_prefer_greater_id() {
    let when = at(2024, 1, 8, 0, 0);
    let a = EventBuilder::new("m1", "rollers").id("LOG-1").at(when).build();
    let b = EventBuilder::new("m1", "rollers").id("LOG-2").at(when).build();

    assert_eq!(LatestIndex::build([&a, &b]).get("m1", "rollers").unwrap().id, "LOG-2");
    assert_eq!(LatestIndex::build([&b, &a]).get("m1", "rollers").unwrap().id, "LOG-2");
}

#[test]
fn test_empty_index() {
    let index = LatestIndex::build(&Vec::<CompletionEvent>::new());
    assert!(index.is_empty());
}

// =============================================================================
// SCOPE
// =============================================================================

#[test]
fn test_scope_matches_target_to_asset_kind() {
    let scope = pairs_in_scope(&sample_catalog());
    let pairs: Vec<(&str, &str)> =
        scope.pairs.iter().map(|p| (p.asset_id.as_str(), p.task_id.as_str())).collect();

    assert_eq!(
        pairs,
        vec![("m1", "rollers"), ("m1", "floor"), ("m1", "bearings"), ("r1", "floor")]
    );
    assert!(scope.gaps.is_empty());
}

#[test]
fn test_scope_skips_inactive_assets_and_items() {
    let mut catalog = sample_catalog();
    catalog.assets[1].active = false;
    catalog.items.push(ItemBuilder::new("retired", "weekly").inactive().build());

    let scope = pairs_in_scope(&catalog);
    assert_eq!(scope.pairs.len(), 3);
    assert!(scope.pairs.iter().all(|p| p.asset_id == "m1" && p.task_id != "retired"));
}

#[test]
fn test_scope_reports_dangling_category_as_gap() {
    let mut catalog = sample_catalog();
    catalog.items.push(ItemBuilder::new("orphan", "missing").build());

    let scope = pairs_in_scope(&catalog);
    assert_eq!(scope.pairs.len(), 4);
    assert_eq!(scope.gaps.len(), 1);
    assert_eq!(scope.gaps[0].task_id, "orphan");
    assert_eq!(scope.gaps[0].reason, "category not found");
}

#[test]
fn test_scope_reports_bad_frequency_as_gap() {
    let mut catalog = sample_catalog();
    catalog.categories.push(CategoryBuilder::new("broken").frequency("interval", 0).build());
    catalog.categories.push(CategoryBuilder::new("odd").frequency("fortnightly", 14).build());
    catalog.items.push(ItemBuilder::new("a", "broken").build());
    catalog.items.push(ItemBuilder::new("b", "odd").build());

    let scope = pairs_in_scope(&catalog);
    assert_eq!(scope.pairs.len(), 4);
    let gap_ids: Vec<&str> = scope.gaps.iter().map(|g| g.task_id.as_str()).collect();
    assert_eq!(gap_ids, vec!["a", "b"]);
}

// =============================================================================
// AGGREGATION
// =============================================================================

#[test]
fn test_aggregate_counts() {
    let catalog = sample_catalog();
    let events = sample_events();
    let scope = pairs_in_scope(&catalog);
    let summary = aggregate(&scope.pairs, &LatestIndex::build(&events), &at(2024, 1, 10, 12, 0));

    assert_eq!(summary, Summary::from_counts(4, 2));
    assert_eq!(summary.completed_count, 2);
    assert_eq!(summary.percent_complete, 50);
    assert_eq!(summary.efficiency, 50);
}

#[test]
fn test_aggregate_empty_scope_is_complete() {
    let summary = aggregate(&[], &LatestIndex::default(), &at(2024, 1, 10, 12, 0));
    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.percent_complete, 100);
    assert_eq!(summary.efficiency, 100);
}

#[test]
fn test_report_breakdown() {
    let catalog = sample_catalog();
    let events = sample_events();
    let report = Report::build(&catalog, &LatestIndex::build(&events), &at(2024, 1, 10, 12, 0));

    assert_eq!(report.summary.total_count, 4);
    assert_eq!(report.summary.overdue_count, 2);

    let machine = report.asset("m1").unwrap();
    assert_eq!(machine.name, "Machine 1");
    assert_eq!(machine.summary.total_count, 3);
    assert_eq!(machine.summary.overdue_count, 1);
    assert_eq!(machine.summary.percent_complete, 67);

    let ids: Vec<&str> = machine.categories.iter().map(|c| c.category_id.as_str()).collect();
    assert_eq!(ids, vec!["weekly", "lube"]);
    assert_eq!(machine.categories[0].summary.percent_complete, 50);
    assert_eq!(machine.categories[1].frequency, FrequencyClass::SimpleInterval(10));
    assert_eq!(machine.categories[1].summary.percent_complete, 100);

    let room = report.asset("r1").unwrap();
    assert_eq!(room.name, "Ink room");
    assert_eq!(room.summary.efficiency, 0);
}

#[test]
fn test_report_overdue_pairs() {
    let catalog = sample_catalog();
    let events = sample_events();
    let report = Report::build(&catalog, &LatestIndex::build(&events), &at(2024, 1, 10, 12, 0));

    let overdue: Vec<(&str, &str)> =
        report.overdue().map(|p| (p.asset_id.as_str(), p.task_id.as_str())).collect();
    assert_eq!(overdue, vec![("m1", "floor"), ("r1", "floor")]);

    let never = report.pairs.iter().find(|p| p.asset_id == "m1" && p.task_id == "floor").unwrap();
    assert_eq!(never.last_completed, None);
    assert_eq!(never.days_remaining, None);
}

#[test]
fn test_report_on_empty_catalog() {
    let report = Report::build(&Catalog::default(), &LatestIndex::default(), &at(2024, 1, 10, 12, 0));
    assert_eq!(report.summary, Summary::default());
    assert!(report.assets.is_empty());
}

// =============================================================================
// DIGEST
// =============================================================================

#[test]
fn test_digest_groups_by_asset() {
    let catalog = sample_catalog();
    let events = sample_events();
    let report = Report::build(&catalog, &LatestIndex::build(&events), &at(2024, 1, 10, 12, 0));

    let groups = digest(&report, &catalog);
    assert_eq!(overdue_total(&groups), 2);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].asset_name, "Machine 1");
    assert_eq!(groups[0].entries[0].task_name, "Item floor");
    assert_eq!(groups[0].entries[0].category_name, "Category weekly");
    assert_eq!(groups[1].entries[0].last_completed, Some(at(2024, 1, 2, 8, 0)));
}

#[test]
fn test_digest_before_cutover_only_lists_never_done() {
    let catalog = sample_catalog();
    let events = sample_events();
    // Friday before the cutover: the January 2 floor sweep still counts
    let report = Report::build(&catalog, &LatestIndex::build(&events), &at(2024, 1, 5, 12, 0));

    let groups = digest(&report, &catalog);
    assert_eq!(overdue_total(&groups), 1);
    assert_eq!(groups[0].asset_id, "m1");
}
