//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use super::context::Context;
use upkeep::output::OutputMode;

/// upkeep - Overdue tracking for recurring maintenance
#[derive(Parser, Debug)]
#[command(
    name = "upkeep",
    version,
    about = "Overdue tracking for recurring maintenance",
    long_about = "Decide which maintenance tasks are due.\n\n\
                  Weekly, biweekly, quarterly and semiannual tasks reset at Friday 22:00 cutovers.\n\
                  Interval tasks are due once their interval in days has elapsed."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Snapshot file (defaults to the configured one, then ./upkeep.toml)
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Evaluate at this RFC 3339 instant instead of the wall clock
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Local UTC offset for cutovers, e.g. -03:00
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub offset: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a starter snapshot file
    Init {
        /// Overwrite an existing snapshot
        #[arg(short, long)]
        force: bool,
    },

    /// Show completion and overdue counts per asset and category
    Status {
        /// Only show this asset
        #[arg(short, long)]
        asset: Option<String>,
    },

    /// Show the current and next cutover for a frequency
    Cutover {
        /// weekly, biweekly, quarterly, semiannual
        frequency: String,
    },

    /// Check whether one task is overdue on one asset
    Check {
        /// Asset ID
        asset: String,

        /// Item ID
        task: String,
    },

    /// Record a completion (refused while the task is still current)
    Complete {
        /// Asset ID
        asset: String,

        /// Item ID
        task: String,

        /// Who performed the work
        #[arg(short, long)]
        by: String,

        /// Rating: poor, good, excellent
        #[arg(short, long)]
        rating: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Remove a completion
    Uncheck {
        /// Completion ID
        id: String,
    },

    /// Rate or comment on a completion
    Annotate {
        /// Completion ID
        id: String,

        /// Rating: poor, good, excellent
        #[arg(short, long)]
        rating: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List overdue items grouped by asset
    Digest,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("upkeep v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'upkeep --help' for usage");
            println!("Run 'upkeep init' to get started");
        }
        return Ok(());
    };

    if matches!(command, Command::Version) {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION")
                })
            );
        } else {
            println!("upkeep v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let ctx = Context::resolve(cli.snapshot, cli.now.as_deref(), cli.offset.as_deref(), output_mode)?;

    match command {
        Command::Init { force } => commands::init(&ctx, force),
        Command::Status { asset } => commands::status(&ctx, asset.as_deref()),
        Command::Cutover { frequency } => commands::cutover(&ctx, &frequency),
        Command::Check { asset, task } => commands::check(&ctx, &asset, &task),
        Command::Complete {
            asset,
            task,
            by,
            rating,
            note,
        } => commands::complete(&ctx, &asset, &task, &by, rating.as_deref(), note),
        Command::Uncheck { id } => commands::uncheck(&ctx, &id),
        Command::Annotate { id, rating, note } => {
            commands::annotate(&ctx, &id, rating.as_deref(), note)
        },
        Command::Digest => commands::digest(&ctx),
        Command::Version => Ok(()),
    }
}
