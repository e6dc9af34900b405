//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`cutover`] - Most recent calendar cutover for a frequency class
//! - [`overdue`] - Is a task overdue right now?
//! - [`report`] - Roll overdue results up for dashboards
//! - [`digest`] - Group overdue items by asset

pub mod cutover;
pub mod digest;
pub mod overdue;
pub mod report;

pub use cutover::{CUTOVER_HOUR, next_cutover, reference_instant};
pub use digest::{AssetDigest, DigestEntry, digest, overdue_total};
pub use overdue::{Cadence, Evaluation, days_remaining, elapsed_days, evaluate, is_overdue};
pub use report::{
    AssetReport, CategoryProgress, DataGap, LatestIndex, PairStatus, Report, ScheduledPair, Scope,
    Summary, aggregate, latest_completions, pairs_in_scope,
};
