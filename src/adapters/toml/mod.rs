//! TOML snapshot adapter
//!
//! Implements `CompletionLedger` and `TaskCatalog` using a snapshot file.
//!
//! - [`parser`] - Read and deserialize snapshot files
//! - [`writer`] - Create and rewrite snapshot files
//! - [`repository`] - Port implementations

pub mod parser;
pub mod repository;
pub mod writer;

pub use parser::{SnapshotFile, load_file, parse_snapshot};
pub use repository::TomlSnapshot;
pub use writer::{TEMPLATE, format_snapshot, next_log_id, save_file};
