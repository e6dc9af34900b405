//! Cutover command - show the reference instant for a frequency

use upkeep::core::models::FrequencyClass;
use upkeep::core::services::{next_cutover, reference_instant};
use upkeep::output::CutoverResult;

use crate::cli::context::Context;

/// Print the most recent and the next cutover at `now`
pub fn cutover(ctx: &Context, frequency: &str) -> anyhow::Result<()> {
    let frequency: FrequencyClass = frequency.parse()?;
    if !frequency.is_calendar_anchored() {
        anyhow::bail!("{frequency} counts elapsed days and has no cutovers");
    }

    CutoverResult {
        frequency: frequency.to_string(),
        now: ctx.now.to_rfc3339(),
        reference: reference_instant(frequency, &ctx.now).map(|t| t.to_rfc3339()),
        next: next_cutover(frequency, &ctx.now).map(|t| t.to_rfc3339()),
    }
    .render(ctx.mode);
    Ok(())
}
