//! Core domain logic for upkeep
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (FrequencyClass, Asset, Item, CompletionEvent)
//! - `services/` - Cutover derivation, overdue evaluation, aggregation
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Typed errors for invalid domain input
//! - `time` - Offset and instant parsing

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
pub mod time;

pub use error::ScheduleError;
