//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (datastores, snapshot files).
//!
//! Implementations live in the `adapters` module.
//!
//! The core services never call these traits themselves: callers read a
//! consistent snapshot through them and hand it to the services.

mod completion_ledger;
mod task_catalog;

pub use completion_ledger::CompletionLedger;
pub use task_catalog::TaskCatalog;
