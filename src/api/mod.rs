//! Transport-neutral operations: analyze and suggest.
//!
//! The seam between the scoring core and whatever carries the payloads.
//! Hosts hand over either a typed [`AnalyzeRequest`] or a raw JSON string
//! and get back fully scored, explained, and sorted batches; nothing in
//! this crate speaks HTTP.
//!
//! # Design
//!
//! Failure handling runs on two tiers. The envelope is strict: a payload
//! that cannot be read as a request shape is rejected with
//! [`AnalyzeError`]. Individual task records are lax: any record that
//! fails deserialization, date parsing, or range validation is dropped
//! silently and the rest of the batch is scored as if it never arrived.

mod analyze;
mod error;
mod suggest;
mod types;

pub use analyze::{analyze, analyze_at, analyze_json, analyze_json_at};
pub use error::AnalyzeError;
pub use suggest::suggest;
pub use types::{AnalyzeRequest, AnalyzeResponse, SuggestResponse, Suggestion};
