//! Hand-landmark gesture recognition for the duel.
//!
//! The pipeline for one player and one camera frame:
//!
//! ```text
//! landmarks --extract--> FingerState --classify(RuleTable)--> GestureRule
//!           --EntryComposer--> ActionEntry (once an action and an element are seen)
//! ```
//!
//! Recognised gestures are also pushed into a [`GestureQueue`] for on-screen
//! feedback. Everything here is deterministic; malformed landmark input is
//! reported through `tracing` and treated as "no gesture".
pub mod classifier;
pub mod composer;
pub mod constraint;
pub mod error;
pub mod features;
pub mod landmarks;
pub mod pose;
pub mod queue;
pub mod rule;

pub use classifier::classify;
pub use composer::EntryComposer;
pub use constraint::Constraint;
pub use error::{MalformedInput, RuleError};
pub use features::{FeatureConfig, Finger, FingerFeatures, FingerState, extract, try_extract};
pub use landmarks::{LANDMARK_COUNT, LandmarkCoordinate};
pub use pose::HandPose;
pub use queue::GestureQueue;
pub use rule::{Condition, FingerCondition, GestureCode, GestureRule, RuleTable};
