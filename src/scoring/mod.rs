//! Strategy scoring, explanation, and ranking for task batches.
//!
//! Evaluates every valid task in a batch under one of four strategies and
//! returns the batch scored, explained, and sorted:
//!
//! - **Focused strategies** (`fastest`, `impact`, `deadline`): a single
//!   factor drives both the score and the sort key.
//! - **Smart balance**: importance, urgency, effort, and dependency
//!   fan-out combine via a fixed 40/30/20/10 weighted sum into a priority
//!   in `[0, 100]`.
//!
//! # Design
//!
//! Factor scorers are pure step functions over task fields; only the
//! dependency factor reads the rest of the batch. The evaluation date is
//! captured once per request and threaded through [`ScoreContext`], so one
//! batch stays internally consistent even across midnight. Sorting is
//! always stable: tasks the strategy cannot distinguish keep their input
//! order.
//!
//! # References
//!
//! Weighted multi-factor prioritization: Reinertsen (2009), "The
//! Principles of Product Development Flow" (weighted shortest job first)

mod engine;
mod explain;
mod factors;

pub use engine::{priority_score, rank};
pub use explain::explanation;
pub use factors::{days_until, dependency_score, effort_score, urgency_score, ScoreContext};
