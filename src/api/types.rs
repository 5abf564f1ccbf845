//! Request and response envelopes for the analyze and suggest operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{ScoredTask, Strategy};

/// An analyze request: raw task records plus an optional strategy.
///
/// `tasks` holds unvalidated JSON values on purpose: a record that fails
/// to deserialize or validate is dropped on its own without failing the
/// envelope. Only the envelope shape itself is strict, so a payload whose
/// `tasks` is not an array is rejected as a whole.
///
/// Both fields default, matching hosts that send partial envelopes: no
/// `tasks` means an empty batch, no `strategy` (or JSON `null`) means
/// smart balance.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use u_triage::api::AnalyzeRequest;
/// use u_triage::model::Strategy;
///
/// let request = AnalyzeRequest::new(vec![json!({
///     "title": "write report",
///     "due_date": "2026-09-15",
///     "estimated_hours": 3,
///     "importance": 7
/// })])
/// .with_strategy(Strategy::Deadline);
/// assert_eq!(request.tasks.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw task records, validated individually downstream.
    #[serde(default)]
    pub tasks: Vec<Value>,

    /// Requested strategy; `None` means smart balance.
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

impl AnalyzeRequest {
    /// Creates a request with the default strategy.
    pub fn new(tasks: Vec<Value>) -> Self {
        Self {
            tasks,
            strategy: None,
        }
    }

    /// Sets an explicit strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
}

/// The analyze result: surviving tasks, scored and sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub tasks: Vec<ScoredTask>,
}

/// One canned suggestion record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Short imperative, e.g. `"Complete quick wins"`.
    pub task: String,

    /// One-line rationale.
    pub reason: String,
}

/// The suggest result: a fixed list of general recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}
