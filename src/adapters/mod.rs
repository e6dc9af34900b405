//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - Snapshot file holding the catalog and the completion log

pub mod toml;
