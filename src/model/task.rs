//! Task records: raw boundary input, validated working form, scored output.
//!
//! A task crosses three representations during one request:
//!
//! 1. [`RawTask`]: what the boundary accepts. Every field is optional so
//!    that validation, not deserialization, decides a record's fate.
//! 2. [`Task`]: the validated record the scoring core operates on.
//! 3. [`ScoredTask`]: the output record, a `Task` plus its score and
//!    explanation.
//!
//! Records live only for the duration of one call; nothing here persists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format for due dates, matching the boundary contract.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// An unvalidated task record as received at the boundary.
///
/// All fields are optional: a record missing a required field, carrying an
/// out-of-range value, or naming an unparseable date is *silently dropped*
/// from the batch by [`RawTask::into_task`]; it never fails the request
/// and never produces a per-record error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTask {
    /// Optional identifier. Only referenced by other tasks' `dependencies`.
    #[serde(default)]
    pub id: Option<i64>,

    /// Task title. Required to be present; content is never validated.
    #[serde(default)]
    pub title: Option<String>,

    /// Due date as an ISO `YYYY-MM-DD` string. Parsed during conversion.
    #[serde(default)]
    pub due_date: Option<String>,

    /// Estimated effort in whole hours. Must be strictly positive.
    #[serde(default)]
    pub estimated_hours: Option<i64>,

    /// Importance on a 1 to 10 scale, inclusive.
    #[serde(default)]
    pub importance: Option<i64>,

    /// Identifiers of tasks this one depends on. Missing and `null` both
    /// mean "no dependencies".
    #[serde(default)]
    pub dependencies: Option<Vec<i64>>,
}

impl RawTask {
    /// Validates and converts into a typed [`Task`].
    ///
    /// Returns `None`, dropping the record, when any required field
    /// (`title`, `due_date`, `estimated_hours`, `importance`) is absent,
    /// the date does not parse as `YYYY-MM-DD`, or the range invariant
    /// fails. Dependency references are not resolved; a task may freely
    /// name identifiers that do not exist in the batch.
    pub fn into_task(self) -> Option<Task> {
        let title = self.title?;
        let raw_date = self.due_date?;
        let estimated_hours = self.estimated_hours?;
        let importance = self.importance?;

        let due_date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).ok()?;
        let task = Task {
            id: self.id,
            title,
            due_date,
            estimated_hours,
            importance,
            dependencies: self.dependencies.unwrap_or_default(),
        };
        task.is_valid().then_some(task)
    }
}

/// A validated task record.
///
/// This is the form the scoring core operates on: the date is already
/// parsed and the required fields are guaranteed present. The numeric
/// range invariant (importance in `1..=10`, `estimated_hours > 0`) is
/// re-checked by [`Task::is_valid`] so that hosts constructing `Task`
/// values directly get the same silent-drop behavior from ranking as
/// records arriving through the JSON boundary.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_triage::model::Task;
///
/// let task = Task::new("write report", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(), 3, 8)
///     .with_id(7)
///     .with_dependencies(vec![3, 4]);
/// assert!(task.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Optional identifier, referenced by other tasks' dependency lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub title: String,

    /// Calendar due date (no time-of-day component).
    pub due_date: NaiveDate,

    /// Estimated effort in whole hours, strictly positive.
    pub estimated_hours: i64,

    /// Importance on a 1 to 10 scale.
    pub importance: i64,

    /// Advisory dependency identifiers. Never resolved into a graph.
    #[serde(default)]
    pub dependencies: Vec<i64>,
}

impl Task {
    /// Creates a task with no id and no dependencies.
    pub fn new(
        title: impl Into<String>,
        due_date: NaiveDate,
        estimated_hours: i64,
        importance: i64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            due_date,
            estimated_hours,
            importance,
            dependencies: Vec::new(),
        }
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the dependency list.
    pub fn with_dependencies(mut self, dependencies: Vec<i64>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Whether the numeric range invariant holds.
    ///
    /// Presence and date parseability are guaranteed by the type; this
    /// checks what the type cannot: importance in `1..=10` and
    /// `estimated_hours > 0`.
    pub fn is_valid(&self) -> bool {
        (1..=10).contains(&self.importance) && self.estimated_hours > 0
    }
}

/// A scored output record: the task fields plus the strategy's verdict.
///
/// Serializes `due_date` back to ISO `YYYY-MM-DD` and omits `id` when the
/// input had none. Carries exactly the documented fields; request-scoped
/// working state never leaks into output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub title: String,

    pub due_date: NaiveDate,

    pub estimated_hours: i64,

    pub importance: i64,

    #[serde(default)]
    pub dependencies: Vec<i64>,

    /// Numeric priority under the requested strategy.
    pub priority_score: f64,

    /// Human-readable justification, e.g.
    /// `"Smart Balance - Score 77: important, urgent, quick win"`.
    pub priority_explanation: String,
}

impl ScoredTask {
    /// Pairs a validated task with its score and explanation.
    pub fn from_task(task: &Task, priority_score: f64, priority_explanation: String) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies.clone(),
            priority_score,
            priority_explanation,
        }
    }
}
