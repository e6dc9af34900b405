//! Uncheck and annotate commands - the two edits a completion allows

use upkeep::core::models::Rating;
use upkeep::core::ports::CompletionLedger;
use upkeep::output::OperationResult;

use crate::cli::context::Context;

/// Remove a completion
pub fn uncheck(ctx: &Context, id: &str) -> anyhow::Result<()> {
    ctx.snapshot.retract(id)?;
    log::info!("retracted {id}");

    OperationResult {
        success: true,
        message: format!("Removed {id}"),
    }
    .render(ctx.mode);
    Ok(())
}

/// Set the rating and note on a completion
pub fn annotate(ctx: &Context, id: &str, rating: Option<&str>, note: Option<String>) -> anyhow::Result<()> {
    let rating = rating.map(str::parse::<Rating>).transpose()?;
    ctx.snapshot.annotate(id, rating, note)?;

    OperationResult {
        success: true,
        message: format!("Updated {id}"),
    }
    .render(ctx.mode);
    Ok(())
}
