//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.upkeep/config.toml` (or under `$UPKEEP_HOME`).
//!
//! ```toml
//! [schedule]
//! utc_offset = "-03:00"
//!
//! [ledger]
//! snapshot = "/srv/maintenance/upkeep.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::ScheduleError;
use crate::core::time::parse_offset;
use crate::paths;

/// Global upkeep configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Scheduling preferences
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Where completions are read from
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Scheduling preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Local UTC offset cutovers are computed in
    #[serde(default = "default_offset")]
    pub utc_offset: String,
}

fn default_offset() -> String {
    "+00:00".to_string()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset: default_offset(),
        }
    }
}

impl ScheduleConfig {
    /// The configured offset
    pub fn offset(&self) -> Result<FixedOffset, ScheduleError> {
        parse_offset(&self.utc_offset)
    }
}

/// Ledger location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Snapshot file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or use defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|c| Self::parse(&c)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Parse config content
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML for this config.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Snapshot path: the configured one, or `./upkeep.toml`
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.ledger.snapshot.as_ref().map_or_else(paths::default_snapshot, PathBuf::from)
    }
}
