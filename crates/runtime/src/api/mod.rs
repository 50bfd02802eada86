//! Types surfaced to runtime clients.

mod errors;
mod outcome;

pub use errors::{Result, RuntimeError};
pub use outcome::{FrameOutcome, ReplaySummary};
