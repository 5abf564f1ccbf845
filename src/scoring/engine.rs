//! Strategy dispatch and batch ranking.

use std::cmp::{Ordering, Reverse};

use chrono::NaiveDate;

use crate::model::{ScoredTask, Strategy, Task};

use super::explain::explanation;
use super::factors::{dependency_score, effort_score, urgency_score, ScoreContext};

/// Scores one task under `strategy`.
///
/// - fastest: `max(100 - 10 * estimated_hours, 0)`, so anything at 10
///   hours or more floors at zero.
/// - impact: `importance * 10`.
/// - deadline: urgency scaled to `[20, 100]`.
/// - smart: `40 * importance/10 + 30 * urgency + 20 * effort +
///   10 * dependency`, rounded to two decimals. The weights are fixed
///   constants summing to 100, which keeps the result inside `[0, 100]`
///   for any valid task.
///
/// Only the smart and deadline strategies read the context; the others
/// depend on the task alone. Callers are expected to have validated the
/// task; [`rank`] does this for whole batches.
pub fn priority_score(strategy: Strategy, task: &Task, ctx: &ScoreContext<'_>) -> f64 {
    match strategy {
        Strategy::Fastest => {
            let penalty = task.estimated_hours.saturating_mul(10);
            100_i64.saturating_sub(penalty).max(0) as f64
        }
        Strategy::Impact => task.importance.saturating_mul(10) as f64,
        Strategy::Deadline => urgency_score(task.due_date, ctx.today) * 100.0,
        Strategy::Smart => {
            let importance = (task.importance as f64 / 10.0) * 40.0;
            let urgency = urgency_score(task.due_date, ctx.today) * 30.0;
            let effort = effort_score(task.estimated_hours) * 20.0;
            let dependency = dependency_score(task, ctx.batch) * 10.0;
            round2(importance + urgency + effort + dependency)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validates, scores, explains, and sorts a batch in one pass.
///
/// Tasks failing [`Task::is_valid`] are dropped silently; everything else
/// is scored against the surviving batch (dependency fan-out never sees
/// dropped records) and sorted by the strategy's key:
///
/// - fastest → ascending estimated hours
/// - impact → descending importance
/// - deadline → ascending due date
/// - smart → descending priority score
///
/// All sorts are stable, so tasks comparing equal keep their input order.
/// `today` is the single evaluation date for the whole batch.
pub fn rank(strategy: Strategy, tasks: &[Task], today: NaiveDate) -> Vec<ScoredTask> {
    let valid: Vec<Task> = tasks.iter().filter(|t| t.is_valid()).cloned().collect();
    let ctx = ScoreContext::new(today, &valid);

    let mut scored: Vec<ScoredTask> = valid
        .iter()
        .map(|task| {
            let score = priority_score(strategy, task, &ctx);
            let text = explanation(strategy, task, score, today);
            ScoredTask::from_task(task, score, text)
        })
        .collect();

    sort_scored(strategy, &mut scored);
    scored
}

/// Stable sort by the strategy's ranking key.
fn sort_scored(strategy: Strategy, scored: &mut [ScoredTask]) {
    match strategy {
        Strategy::Fastest => scored.sort_by_key(|t| t.estimated_hours),
        Strategy::Impact => scored.sort_by_key(|t| Reverse(t.importance)),
        Strategy::Deadline => scored.sort_by_key(|t| t.due_date),
        Strategy::Smart => scored.sort_by(|a, b| {
            b.priority_score
                .partial_cmp(&a.priority_score)
                .unwrap_or(Ordering::Equal)
        }),
    }
}
