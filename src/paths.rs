//! Centralized path definitions for upkeep
//!
//! ## Layout
//!
//! ```text
//! ~/.upkeep/                # or $UPKEEP_HOME
//! └── config.toml           # User preferences (offset, default snapshot)
//!
//! ./upkeep.toml             # Default snapshot when none is configured
//! ```

use std::path::PathBuf;

/// Environment variable overriding the global directory
pub const HOME_ENV: &str = "UPKEEP_HOME";

/// Global config directory name
const GLOBAL_DIR: &str = ".upkeep";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Snapshot filename used when nothing else is configured
pub const DEFAULT_SNAPSHOT: &str = "upkeep.toml";

/// Get the global upkeep directory.
///
/// Returns `$UPKEEP_HOME` when set, otherwise `~/.upkeep/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default snapshot path, relative to the working directory.
#[must_use]
pub fn default_snapshot() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT)
}
