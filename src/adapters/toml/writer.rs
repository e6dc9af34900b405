//! TOML writer for snapshot files
//!
//! Handles creating snapshot files and writing them back after a change.

use std::fs;
use std::path::Path;

use super::parser::SnapshotFile;

/// Header written at the top of every snapshot file
const HEADER: &str = "# upkeep snapshot\n# completed_at values are RFC 3339 strings\n\n";

/// Template written by `upkeep init`
pub const TEMPLATE: &str = r#"# upkeep snapshot
# completed_at values are RFC 3339 strings

[[category]]
id = "weekly-clean"
name = "Weekly cleaning"
frequency = "weekly"
frequency_days = 7
display_order = 1

[[category]]
id = "lubrication"
name = "Lubrication"
frequency = "interval"
frequency_days = 10
display_order = 2

[[item]]
id = "rollers"
category_id = "weekly-clean"
name = "Clean rollers"
target_type = "machine"

[[item]]
id = "floor"
category_id = "weekly-clean"
name = "Sweep floor"
target_type = "both"

[[item]]
id = "bearings"
category_id = "lubrication"
name = "Grease bearings"
target_type = "machine"

[[asset]]
id = "m28"
name = "Printer 28"
number = "28"
type = "machine"

[[asset]]
id = "ink-room"
name = "Ink room"
number = "INK"
type = "room"
"#;

/// Format a `SnapshotFile` as TOML
///
/// # Errors
///
/// Returns an error if the snapshot cannot be serialized.
pub fn format_snapshot(file: &SnapshotFile) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(file)?;
    Ok(format!("{HEADER}{body}"))
}

/// Write a snapshot back to disk
///
/// # Errors
///
/// Returns an error if the snapshot cannot be serialized or written.
pub fn save_file(path: &Path, file: &SnapshotFile) -> anyhow::Result<()> {
    fs::write(path, format_snapshot(file)?)?;
    Ok(())
}

/// Next completion id: one past the highest existing `LOG-N`
#[must_use]
pub fn next_log_id(file: &SnapshotFile) -> String {
    let next = file
        .logs
        .iter()
        .filter_map(|l| l.id.strip_prefix("LOG-").and_then(|n| n.parse::<u32>().ok()))
        .max()
        .map_or(1, |n| n + 1);
    format!("LOG-{next}")
}
