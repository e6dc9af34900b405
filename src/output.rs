//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::{AssetDigest, AssetReport, DataGap, Summary};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a status operation
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// The instant the status was evaluated at (RFC 3339)
    pub now: String,
    /// Counts over every pair in scope
    pub summary: Summary,
    /// Per-asset breakdown
    pub assets: Vec<AssetReport>,
    /// Items excluded as data gaps
    pub gaps: Vec<DataGap>,
}

/// Result of a cutover lookup
#[derive(Debug, Serialize)]
pub struct CutoverResult {
    /// Frequency class looked up
    pub frequency: String,
    /// The instant used as "now" (RFC 3339)
    pub now: String,
    /// Most recent cutover at or before now, if any
    pub reference: Option<String>,
    /// Next cutover after now, if any
    pub next: Option<String>,
}

/// Result of checking one (asset, task) pair
#[derive(Debug, Serialize)]
pub struct PairCheckResult {
    /// Asset id
    pub asset_id: String,
    /// Task id
    pub task_id: String,
    /// Whether the task is overdue
    pub overdue: bool,
    /// Latest completion (RFC 3339), if any
    pub last_completed: Option<String>,
    /// Days left in the nominal interval, if ever completed
    pub days_remaining: Option<i64>,
    /// Human-readable verdict
    pub message: String,
}

/// Result of a digest operation
#[derive(Debug, Serialize)]
pub struct DigestResult {
    /// The instant the digest was evaluated at (RFC 3339)
    pub now: String,
    /// Total overdue items
    pub total: usize,
    /// Overdue items grouped by asset
    pub assets: Vec<AssetDigest>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Colour a percentage the way the dashboard does: green above 80, yellow above 50
fn paint_percent(value: u32) -> colored::ColoredString {
    let text = format!("{value}%");
    if value > 80 {
        text.green()
    } else if value > 50 {
        text.yellow()
    } else {
        text.red()
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Status at {}\n", self.now);
        println!(
            "Efficiency: {}  ({} of {} current, {} overdue)\n",
            paint_percent(self.summary.efficiency),
            self.summary.completed_count,
            self.summary.total_count,
            self.summary.overdue_count
        );

        if self.assets.is_empty() {
            println!("No active assets.");
        }

        for asset in &self.assets {
            println!(
                "{}  {} OK, {} overdue",
                asset.name.bold(),
                paint_percent(asset.summary.efficiency),
                asset.summary.overdue_count
            );
            for category in &asset.categories {
                println!(
                    "  [{}] {}: {}/{} ({}%)",
                    category.frequency.label(),
                    category.name,
                    category.summary.completed_count,
                    category.summary.total_count,
                    category.summary.percent_complete
                );
            }
            println!();
        }

        if !self.gaps.is_empty() {
            println!("Skipped {} item(s) with unusable categories:", self.gaps.len());
            for gap in &self.gaps {
                println!("  {} ({}): {}", gap.task_id, gap.category_id, gap.reason);
            }
        }
    }
}

impl CutoverResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Frequency: {}", self.frequency);
                println!("Now:       {}", self.now);
                println!("Reference: {}", self.reference.as_deref().unwrap_or("none"));
                println!("Next:      {}", self.next.as_deref().unwrap_or("none"));
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl PairCheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.overdue {
                    println!("{}", self.message.red());
                } else {
                    println!("{}", self.message.green());
                }
                if let Some(last) = &self.last_completed {
                    println!("Last completed: {last}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl DigestResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.total == 0 {
            println!("No overdue items.");
            return;
        }

        println!("{} overdue item(s) at {}\n", self.total, self.now);
        for group in &self.assets {
            println!("{}", group.asset_name.bold());
            for entry in &group.entries {
                let last = entry
                    .last_completed
                    .map_or_else(|| "never".to_string(), |t| t.format("%Y-%m-%d").to_string());
                println!("  {}  ({} | last: {})", entry.task_name, entry.category_name, last);
            }
            println!();
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}
