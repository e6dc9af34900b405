//! Complete command - record that a task was performed

use upkeep::adapters::toml::next_log_id;
use upkeep::core::models::{CompletionEvent, Rating};
use upkeep::core::ports::CompletionLedger;
use upkeep::output::OperationResult;

use super::check::evaluate_pair;
use crate::cli::context::Context;

/// Record a completion at `now`, unless the task is still current
pub fn complete(
    ctx: &Context,
    asset_id: &str,
    task_id: &str,
    performed_by: &str,
    rating: Option<&str>,
    note: Option<String>,
) -> anyhow::Result<()> {
    let rating = rating.map(str::parse::<Rating>).transpose()?;

    let pair = evaluate_pair(ctx, asset_id, task_id)?;
    if !pair.overdue {
        OperationResult {
            success: false,
            message: pair.message,
        }
        .render(ctx.mode);
        return Ok(());
    }

    let id = next_log_id(&ctx.snapshot.load()?);
    let mut event = CompletionEvent::new(&id, asset_id, task_id, ctx.now, performed_by);
    event.annotate(rating, note);
    ctx.snapshot.record(&event)?;
    log::info!("recorded {id} for {asset_id}/{task_id}");

    OperationResult {
        success: true,
        message: format!("Recorded {id}: {task_id} on {asset_id} at {}", ctx.now.to_rfc3339()),
    }
    .render(ctx.mode);
    Ok(())
}
