//! Per-invocation context
//!
//! Resolves the snapshot path, the local offset and "now" from flags and
//! the global config, in that order of precedence.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use upkeep::adapters::toml::TomlSnapshot;
use upkeep::config::GlobalConfig;
use upkeep::core::time::{now_in, parse_instant, parse_offset};
use upkeep::output::OutputMode;

/// Everything a command needs besides its own arguments
#[derive(Debug)]
pub struct Context {
    /// Snapshot acting as ledger and catalog
    pub snapshot: TomlSnapshot,
    /// The instant to evaluate at, in the local offset
    pub now: DateTime<FixedOffset>,
    /// Output mode
    pub mode: OutputMode,
}

impl Context {
    /// Resolve the context from CLI flags and the global config
    pub fn resolve(
        snapshot: Option<PathBuf>,
        now: Option<&str>,
        offset: Option<&str>,
        mode: OutputMode,
    ) -> anyhow::Result<Self> {
        let config = GlobalConfig::load();

        let offset = match offset {
            Some(o) => parse_offset(o)?,
            None => config.schedule.offset()?,
        };
        let now = match now {
            Some(n) => parse_instant(n, offset)?,
            None => now_in(offset),
        };
        let path = snapshot.unwrap_or_else(|| config.snapshot_path());

        log::debug!("snapshot={} now={}", path.display(), now.to_rfc3339());

        Ok(Self {
            snapshot: TomlSnapshot::new(path),
            now,
            mode,
        })
    }
}
