//! Tests for the TOML snapshot adapter

use std::fs;

use tempfile::TempDir;
use upkeep::adapters::toml::{TEMPLATE, TomlSnapshot, next_log_id, parse_snapshot};
use upkeep::core::models::{AssetKind, Rating, TargetScope};
use upkeep::core::ports::{CompletionLedger, TaskCatalog};

use crate::common::fixtures::{EventBuilder, at, at_offset};

fn snapshot_with(content: &str) -> (TempDir, TomlSnapshot) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("upkeep.toml");
    fs::write(&path, content).unwrap();
    (dir, TomlSnapshot::new(path))
}

#[test]
fn test_template_parses() {
    let file = parse_snapshot(TEMPLATE).unwrap();
    assert_eq!(file.categories.len(), 2);
    assert_eq!(file.items.len(), 3);
    assert_eq!(file.assets.len(), 2);
    assert!(file.logs.is_empty());

    assert_eq!(file.assets[1].kind, AssetKind::Room);
    assert_eq!(file.items[1].target, TargetScope::Both);
    assert!(file.items.iter().all(|i| i.active));
    for category in &file.categories {
        assert!(category.frequency_class().is_ok(), "{}", category.id);
    }
}

#[test]
fn test_log_timestamps_keep_offset() {
    let file = parse_snapshot(
        r#"
[[log]]
id = "LOG-1"
asset_id = "m28"
item_id = "rollers"
completed_at = "2024-01-05T22:30:00-03:00"
performed_by = "ana"
rating = "excellent"
"#,
    )
    .unwrap();

    let log = &file.logs[0];
    assert_eq!(log.task_id, "rollers");
    assert_eq!(log.completed_at, at_offset(-3, 2024, 1, 5, 22, 30));
    assert_eq!(log.completed_at.offset().local_minus_utc(), -3 * 3600);
    assert_eq!(log.rating, Some(Rating::Excellent));
    assert_eq!(log.note, None);
}

#[test]
fn test_invalid_snapshot_is_rejected() {
    assert!(parse_snapshot("[[log]]\nid = \"LOG-1\"\n").is_err());
    assert!(parse_snapshot("[[asset]]\nid = \"x\"\nname = \"X\"\ntype = \"truck\"\n").is_err());
}

#[test]
fn test_catalog_from_file() {
    let (_dir, snapshot) = snapshot_with(TEMPLATE);
    let catalog = snapshot.catalog().unwrap();
    assert!(catalog.asset("m28").is_some());
    assert_eq!(catalog.category("lubrication").unwrap().frequency_days, 10);
    assert_eq!(snapshot.items().unwrap().len(), 3);
}

#[test]
fn test_record_then_reload() {
    let (_dir, snapshot) = snapshot_with(TEMPLATE);
    let event = EventBuilder::new("m28", "rollers").id("LOG-1").at(at(2024, 1, 6, 9, 0)).build();
    snapshot.record(&event).unwrap();

    assert_eq!(snapshot.events().unwrap(), vec![event.clone()]);
    assert_eq!(snapshot.assets().unwrap().len(), 2);
    assert!(snapshot.record(&event).is_err());
    assert_eq!(next_log_id(&snapshot.load().unwrap()), "LOG-2");
}

#[test]
fn test_annotate_and_retract() {
    let (_dir, snapshot) = snapshot_with(TEMPLATE);
    snapshot.record(&EventBuilder::new("m28", "rollers").id("LOG-1").build()).unwrap();

    snapshot.annotate("LOG-1", Some(Rating::Poor), Some("redo".to_string())).unwrap();
    let event = snapshot.latest("m28", "rollers").unwrap().unwrap();
    assert_eq!(event.rating, Some(Rating::Poor));
    assert_eq!(event.note.as_deref(), Some("redo"));

    snapshot.retract("LOG-1").unwrap();
    assert!(snapshot.events().unwrap().is_empty());
    assert!(snapshot.retract("LOG-1").is_err());
    assert!(snapshot.annotate("LOG-1", None, None).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let snapshot = TomlSnapshot::new(dir.path().join("absent.toml"));
    assert!(snapshot.events().is_err());
    assert!(snapshot.catalog().is_err());
}

#[test]
fn test_next_log_id_skips_foreign_ids() {
    let mut file = parse_snapshot(TEMPLATE).unwrap();
    assert_eq!(next_log_id(&file), "LOG-1");

    file.logs.push(EventBuilder::new("m28", "rollers").id("LOG-9").build());
    file.logs.push(EventBuilder::new("m28", "rollers").id("legacy-42").build());
    assert_eq!(next_log_id(&file), "LOG-10");
}
