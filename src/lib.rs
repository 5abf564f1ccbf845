//! Strategy-driven task triage: scoring, ranking, and explanation.
//!
//! Takes a batch of user-supplied task records and returns them scored,
//! sorted, and annotated with a human-readable explanation, under one of
//! four strategies:
//!
//! - **Fastest wins**: shortest estimated effort first.
//! - **High impact**: highest importance first.
//! - **Deadline driven**: earliest due date first.
//! - **Smart balance** (default): weighted blend of importance, urgency,
//!   effort, and dependency fan-out.
//!
//! # Architecture
//!
//! Three layers, inner to outer: `model` defines the task records and
//! their validation rules; `scoring` holds the factor scales, strategy
//! dispatch, and ranking; `api` exposes transport-neutral analyze and
//! suggest operations over typed values or raw JSON. The crate contains
//! no transport or persistence concepts; delivering payloads to and from
//! it is the host's concern.

pub mod api;
pub mod model;
pub mod scoring;
