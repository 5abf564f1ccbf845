//! Explanation strings: the human-readable line attached to each scored
//! task.
//!
//! The line format is part of the output contract. Hosts display it
//! verbatim and some parse it, so the label names, the `Score` prefix, and
//! the tag vocabulary are fixed.

use chrono::NaiveDate;

use crate::model::{Strategy, Task};

use super::factors::days_until;

/// Builds the explanation line for one scored task.
///
/// The shape is `"{label} - Score {score}: {details}"` where `details` is
/// a comma-separated tag list. Focused strategies emit exactly one tag:
///
/// - fastest: `quick ({hours}h)`
/// - impact: `importance {importance}/10`
/// - deadline: `due in {days} days` (negative when overdue)
///
/// Smart emits zero or more tags, always in this order: `important`
/// (importance >= 7), `urgent` (due within 2 days, overdue included),
/// `quick win` (estimated at 2 hours or less), `depends on others`
/// (declares any dependencies). When none apply the line ends with the
/// bare `": "` separator.
///
/// Scores render through `f64` display, so whole numbers carry no
/// fractional part: `Score 80`, not `Score 80.0`.
pub fn explanation(strategy: Strategy, task: &Task, score: f64, today: NaiveDate) -> String {
    let days_left = days_until(task.due_date, today);

    let mut details: Vec<String> = Vec::new();
    match strategy {
        Strategy::Fastest => details.push(format!("quick ({}h)", task.estimated_hours)),
        Strategy::Impact => details.push(format!("importance {}/10", task.importance)),
        Strategy::Deadline => details.push(format!("due in {days_left} days")),
        Strategy::Smart => {
            if task.importance >= 7 {
                details.push("important".to_string());
            }
            if days_left <= 2 {
                details.push("urgent".to_string());
            }
            if task.estimated_hours <= 2 {
                details.push("quick win".to_string());
            }
            if !task.dependencies.is_empty() {
                details.push("depends on others".to_string());
            }
        }
    }

    format!("{} - Score {score}: {}", strategy.label(), details.join(", "))
}
