//! Digest command - overdue items grouped by asset

use upkeep::core::ports::{CompletionLedger, TaskCatalog};
use upkeep::core::services::{LatestIndex, Report, digest as group_overdue, overdue_total};
use upkeep::output::DigestResult;

use crate::cli::context::Context;

/// Print every overdue item, grouped by asset
pub fn digest(ctx: &Context) -> anyhow::Result<()> {
    let catalog = ctx.snapshot.catalog()?;
    let events = ctx.snapshot.events()?;
    let report = Report::build(&catalog, &LatestIndex::build(&events), &ctx.now);

    let groups = group_overdue(&report, &catalog);
    DigestResult {
        now: ctx.now.to_rfc3339(),
        total: overdue_total(&groups),
        assets: groups,
    }
    .render(ctx.mode);
    Ok(())
}
