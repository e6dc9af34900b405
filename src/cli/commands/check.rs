//! Check command - is one task overdue on one asset?

use upkeep::core::ports::{CompletionLedger, TaskCatalog};
use upkeep::core::services::{Cadence, evaluate};
use upkeep::output::PairCheckResult;

use crate::cli::context::Context;

/// Check one (asset, task) pair and print the verdict
pub fn check(ctx: &Context, asset_id: &str, task_id: &str) -> anyhow::Result<()> {
    evaluate_pair(ctx, asset_id, task_id)?.render(ctx.mode);
    Ok(())
}

/// Evaluate one pair against the snapshot
///
/// Fails when the asset or item is unknown, when the item does not apply
/// to the asset, or when the item's category cannot be resolved.
pub fn evaluate_pair(ctx: &Context, asset_id: &str, task_id: &str) -> anyhow::Result<PairCheckResult> {
    let catalog = ctx.snapshot.catalog()?;

    let Some(asset) = catalog.asset(asset_id) else {
        anyhow::bail!("Asset not found: {asset_id}");
    };
    let Some(item) = catalog.item(task_id) else {
        anyhow::bail!("Item not found: {task_id}");
    };
    if !item.target.applies_to(asset.kind) {
        anyhow::bail!("Item {task_id} applies to {} assets, not {}", item.target, asset.kind);
    }
    let Some(category) = catalog.category(&item.category_id) else {
        anyhow::bail!("Item {task_id} references unknown category {}", item.category_id);
    };
    let cadence = Cadence::new(category.frequency_class()?, category.frequency_days);

    let latest = ctx.snapshot.latest(asset_id, task_id)?;
    let last = latest.as_ref().map(|e| &e.completed_at);
    let eval = evaluate(last, cadence, &ctx.now);

    let message = match (eval.overdue, last, eval.days_remaining) {
        (true, None, _) => format!("Overdue: {} has never been done on {}", item.name, asset.display_name()),
        (true, Some(t), _) => format!("Overdue: {} last done {}", item.name, t.format("%Y-%m-%d %H:%M")),
        (false, _, Some(days)) => format!("Already completed! Next in {days} day(s)."),
        (false, _, None) => "Already completed!".to_string(),
    };

    Ok(PairCheckResult {
        asset_id: asset_id.to_string(),
        task_id: task_id.to_string(),
        overdue: eval.overdue,
        last_completed: last.map(|t| t.to_rfc3339()),
        days_remaining: eval.days_remaining,
        message,
    })
}
