//! Round actions and their compact wire encoding.
//!
//! An [`ActionEntry`] is what one player commits to for one round. Entries are
//! produced by the gesture pipeline (or loaded from fixtures), buffered per
//! player in an [`ActionSequence`], and consumed round by round by the engine.
//!
//! # Encoding
//!
//! ```text
//! [action][element][direction][2-digit angle]
//!    P       F         +           45        => "PF+45"
//! ```
//!
//! - action: `N` (none), `P` (attack), `D` (defend)
//! - element: `N` (none), `F` (fire), `G` (grass), `W` (water)
//! - direction: `-` (left), `+` (right), `=` (straight)
//! - angle: exactly two decimal digits, `00..=99`

mod codes;
mod entry;
mod sequence;

pub use codes::{ActionCode, Direction, Element};
pub use entry::{ActionEntry, EntryError};
pub use sequence::ActionSequence;
