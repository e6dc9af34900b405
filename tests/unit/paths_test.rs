//! Tests for global path resolution
//!
//! These tests mutate `UPKEEP_HOME`, so they run serially.

use std::path::PathBuf;

use serial_test::serial;
use upkeep::config::GlobalConfig;
use upkeep::paths::{self, HOME_ENV};

#[test]
#[serial(env)]
fn test_home_env_overrides_global_dir() {
    // SAFETY: env access is serialized through the `env` key
    unsafe { std::env::set_var(HOME_ENV, "/tmp/upkeep-home") };
    assert_eq!(paths::global_config_dir(), PathBuf::from("/tmp/upkeep-home"));
    assert_eq!(GlobalConfig::config_path(), PathBuf::from("/tmp/upkeep-home/config.toml"));
    unsafe { std::env::remove_var(HOME_ENV) };
}

#[test]
#[serial(env)]
fn test_empty_home_env_is_ignored() {
    // SAFETY: env access is serialized through the `env` key
    unsafe { std::env::set_var(HOME_ENV, "") };
    assert!(paths::global_config_dir().ends_with(".upkeep"));
    unsafe { std::env::remove_var(HOME_ENV) };
}
