//! Init command - create a starter snapshot

use std::fs;

use upkeep::adapters::toml::TEMPLATE;
use upkeep::output::OperationResult;

use crate::cli::context::Context;

/// Write the starter snapshot unless one already exists
pub fn init(ctx: &Context, force: bool) -> anyhow::Result<()> {
    let path = ctx.snapshot.path();

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                path.display()
            ),
        }
        .render(ctx.mode);
        return Ok(());
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, TEMPLATE)?;
    log::info!("created snapshot {}", path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(ctx.mode);
    Ok(())
}
