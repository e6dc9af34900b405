//! CLI layer for upkeep
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`context`] - Resolved snapshot, clock and output mode
//! - [`commands`] - Command implementations

pub mod app;
pub mod commands;
pub mod context;

// Re-export main entry point
pub use app::run;
