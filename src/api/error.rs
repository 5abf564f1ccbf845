use thiserror::Error;

/// Errors produced by the JSON analyze entry points.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The payload is not something the analyze envelope can be read
    /// from: invalid JSON, a non-object body, or a field whose type
    /// diverges from [`AnalyzeRequest`](super::AnalyzeRequest) (such as a
    /// non-array `tasks`). Malformed individual task records never raise
    /// this; they are dropped during validation instead.
    #[error("malformed analyze payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
