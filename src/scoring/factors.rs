//! Factor scorers: urgency, effort, and dependency fan-out.
//!
//! Each factor maps onto a fixed ordinal scale in `(0, 1]` through step
//! functions. The breakpoints are part of the output contract and must not
//! drift: hosts compare scores across releases.

use chrono::NaiveDate;

use crate::model::Task;

/// Request-scoped evaluation context shared by every scoring call in one
/// batch.
///
/// `today` is captured once per request and threaded explicitly so that all
/// tasks in a batch are compared against the same instant; the scoring core
/// never reads the ambient clock. `batch` is the full validated batch:
/// dependency fan-out is batch-relative, so a task's score can change with
/// the company it keeps.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    /// The evaluation date for the whole request.
    pub today: NaiveDate,

    /// Every validated task in the request, in input order.
    pub batch: &'a [Task],
}

impl<'a> ScoreContext<'a> {
    /// Creates a context over a validated batch.
    pub fn new(today: NaiveDate, batch: &'a [Task]) -> Self {
        Self { today, batch }
    }
}

/// Whole days from `today` until `due_date`; negative when overdue.
///
/// Both the urgency scorer and the explanation generator derive their day
/// counts through this function so the two can never disagree within one
/// request.
pub fn days_until(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Urgency on a fixed step scale, rising as the deadline approaches.
///
/// | days remaining | urgency |
/// |---------------:|--------:|
/// | `< 0` (overdue)| 1.0     |
/// | `0`            | 0.9     |
/// | `1..=2`        | 0.8     |
/// | `3..=7`        | 0.6     |
/// | `8..=14`       | 0.4     |
/// | `> 14`         | 0.2     |
pub fn urgency_score(due_date: NaiveDate, today: NaiveDate) -> f64 {
    match days_until(due_date, today) {
        d if d < 0 => 1.0,
        0 => 0.9,
        1..=2 => 0.8,
        3..=7 => 0.6,
        8..=14 => 0.4,
        _ => 0.2,
    }
}

/// Effort score: lower estimated effort yields a higher score.
///
/// | estimated hours | score |
/// |----------------:|------:|
/// | `<= 1`          | 1.0   |
/// | `<= 2`          | 0.8   |
/// | `<= 4`          | 0.6   |
/// | `<= 8`          | 0.4   |
/// | `> 8`           | 0.2   |
pub fn effort_score(estimated_hours: i64) -> f64 {
    match estimated_hours {
        h if h <= 1 => 1.0,
        2 => 0.8,
        3..=4 => 0.6,
        5..=8 => 0.4,
        _ => 0.2,
    }
}

/// Dependency fan-out score, relative to the whole batch.
///
/// - No declared dependencies → neutral `0.5`.
/// - Declared dependencies and at least one *other* task in the batch lists
///   this task's id among its own dependencies → `0.9` (finishing it
///   unblocks others).
/// - Declared dependencies but nothing references it → `0.3`.
///
/// This measures blocking fan-out only: the task's own dependency list
/// matters solely through its presence, and a task never counts as
/// blocking itself. A task without an id cannot be referenced, so with
/// dependencies declared it scores `0.3`.
///
/// `task` is expected to be an element of `batch`; self-exclusion is by
/// identity, so duplicate ids across distinct tasks remain well-defined.
pub fn dependency_score(task: &Task, batch: &[Task]) -> f64 {
    if task.dependencies.is_empty() {
        return 0.5;
    }
    let Some(id) = task.id else {
        return 0.3;
    };
    let blocks_others = batch
        .iter()
        .filter(|other| !std::ptr::eq(*other, task))
        .any(|other| other.dependencies.contains(&id));
    if blocks_others {
        0.9
    } else {
        0.3
    }
}
