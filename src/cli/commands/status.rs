//! Status command - completion and overdue counts for the dashboard

use upkeep::core::ports::{CompletionLedger, TaskCatalog};
use upkeep::core::services::{LatestIndex, Report};
use upkeep::output::StatusResult;

use crate::cli::context::Context;

/// Show the global, per-asset and per-category roll-up
pub fn status(ctx: &Context, asset: Option<&str>) -> anyhow::Result<()> {
    let catalog = ctx.snapshot.catalog()?;
    let events = ctx.snapshot.events()?;
    let index = LatestIndex::build(&events);

    let report = Report::build(&catalog, &index, &ctx.now);
    for gap in &report.gaps {
        log::warn!(
            "skipping item {} (category {}): {}",
            gap.task_id,
            gap.category_id,
            gap.reason
        );
    }

    let (summary, assets) = match asset {
        Some(id) => {
            let Some(found) = report.asset(id) else {
                anyhow::bail!("Asset not found or inactive: {id}");
            };
            (found.summary, vec![found.clone()])
        },
        None => (report.summary, report.assets),
    };

    StatusResult {
        now: ctx.now.to_rfc3339(),
        summary,
        assets,
        gaps: report.gaps,
    }
    .render(ctx.mode);
    Ok(())
}
