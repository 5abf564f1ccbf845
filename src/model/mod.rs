//! Domain records and the strategy enumeration.
//!
//! # Key Types
//!
//! - [`RawTask`]: unvalidated boundary record (every field optional)
//! - [`Task`]: validated record the scoring core operates on
//! - [`ScoredTask`]: output record with score and explanation
//! - [`Strategy`]: closed set of ranking strategies, defaulting to `Smart`
//!
//! Records are request-scoped values: created from input, scored,
//! serialized back out, and discarded. Nothing in this module touches
//! storage.

mod strategy;
mod task;

pub use strategy::Strategy;
pub use task::{RawTask, ScoredTask, Task};
