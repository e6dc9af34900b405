//! Command implementations

mod check;
mod complete;
mod cutover;
mod digest;
mod init;
mod status;
mod uncheck;

pub use check::check;
pub use complete::complete;
pub use cutover::cutover;
pub use digest::digest;
pub use init::init;
pub use status::status;
pub use uncheck::{annotate, uncheck};
