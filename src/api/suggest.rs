//! Canned suggestions: fixed guidance independent of any task data.

use super::types::{SuggestResponse, Suggestion};

/// Returns the fixed suggestion list.
///
/// Exactly three records in a fixed order. The operation reads no task
/// data and no clock, so hosts may cache the result indefinitely.
pub fn suggest() -> SuggestResponse {
    let records = [
        ("Start highest score task", "High impact + urgency"),
        ("Complete quick wins", "Low effort boosts progress"),
        ("Check deadlines", "Prevent overdue tasks"),
    ];
    SuggestResponse {
        suggestions: records
            .into_iter()
            .map(|(task, reason)| Suggestion {
                task: task.to_string(),
                reason: reason.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exactly_three_fixed_records() {
        let response = suggest();
        let pairs: Vec<(&str, &str)> = response
            .suggestions
            .iter()
            .map(|s| (s.task.as_str(), s.reason.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Start highest score task", "High impact + urgency"),
                ("Complete quick wins", "Low effort boosts progress"),
                ("Check deadlines", "Prevent overdue tasks"),
            ]
        );
    }

    #[test]
    fn test_stable_across_calls() {
        assert_eq!(suggest(), suggest());
    }

    #[test]
    fn test_serialization_shape() {
        let value = serde_json::to_value(suggest()).unwrap();
        assert_eq!(
            value,
            json!({
                "suggestions": [
                    { "task": "Start highest score task", "reason": "High impact + urgency" },
                    { "task": "Complete quick wins", "reason": "Low effort boosts progress" },
                    { "task": "Check deadlines", "reason": "Prevent overdue tasks" }
                ]
            })
        );
    }
}
