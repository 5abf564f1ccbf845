//! Analyze orchestration: envelope in, scored and sorted batch out.

use chrono::{NaiveDate, Utc};

use crate::model::{RawTask, Task};
use crate::scoring::rank;

use super::error::AnalyzeError;
use super::types::{AnalyzeRequest, AnalyzeResponse};

/// Runs the analyze operation against the current UTC date.
///
/// Captures today once and delegates to [`analyze_at`]. Prefer the
/// explicit-date form in tests and anywhere results must be reproducible.
pub fn analyze(request: AnalyzeRequest) -> AnalyzeResponse {
    analyze_at(request, Utc::now().date_naive())
}

/// Runs the analyze operation against an explicit evaluation date.
///
/// Every raw record must deserialize into the task shape, parse its due
/// date as ISO `YYYY-MM-DD`, and pass range validation; a record failing
/// any step is dropped silently and the rest of the batch proceeds.
/// Survivors are scored under the requested strategy (smart balance when
/// none was given) and returned sorted by the strategy's key.
pub fn analyze_at(request: AnalyzeRequest, today: NaiveDate) -> AnalyzeResponse {
    let strategy = request.strategy.unwrap_or_default();
    let received = request.tasks.len();

    let batch: Vec<Task> = request
        .tasks
        .into_iter()
        .filter_map(|value| {
            serde_json::from_value::<RawTask>(value)
                .ok()
                .and_then(RawTask::into_task)
        })
        .collect();

    tracing::debug!(
        received,
        kept = batch.len(),
        strategy = %strategy,
        "validated analyze batch"
    );

    AnalyzeResponse {
        tasks: rank(strategy, &batch, today),
    }
}

/// Parses a JSON payload and runs analyze against the current UTC date.
pub fn analyze_json(payload: &str) -> Result<AnalyzeResponse, AnalyzeError> {
    analyze_json_at(payload, Utc::now().date_naive())
}

/// Parses a JSON payload and runs analyze against an explicit date.
///
/// Only envelope-level failures surface as [`AnalyzeError`]; malformed
/// individual records are dropped exactly as in [`analyze_at`].
pub fn analyze_json_at(payload: &str, today: NaiveDate) -> Result<AnalyzeResponse, AnalyzeError> {
    let request: AnalyzeRequest = match serde_json::from_str(payload) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "rejected malformed analyze payload");
            return Err(AnalyzeError::from(err));
        }
    };
    Ok(analyze_at(request, today))
}
