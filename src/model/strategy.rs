//! Ranking strategy enumeration.

use serde::{Deserialize, Serialize};

/// How a batch of tasks is scored and ordered.
///
/// The set is closed: scoring dispatches with a `match`, and the boundary
/// folds anything it does not recognize into [`Strategy::Smart`] before
/// scoring begins, so there is no unhandled-strategy path at runtime.
///
/// # Wire format
///
/// Strategies travel as lowercase strings (`"fastest"`, `"impact"`,
/// `"deadline"`, `"smart"`). An unknown string deserializes as `Smart`
/// rather than failing the request.
///
/// # Examples
///
/// ```
/// use u_triage::model::Strategy;
///
/// assert_eq!(Strategy::parse("deadline"), Strategy::Deadline);
/// assert_eq!(Strategy::parse("alphabetical"), Strategy::Smart);
/// assert_eq!(Strategy::Deadline.label(), "Deadline Driven");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Shortest tasks first: a pure linear penalty on estimated duration.
    Fastest,

    /// Most important first: importance alone decides the score.
    Impact,

    /// Earliest deadline first: urgency alone decides the score.
    Deadline,

    /// Weighted balance of importance, urgency, effort, and dependencies.
    #[serde(other)]
    Smart,
}

impl Strategy {
    /// All strategies, in display order. Useful for hosts that render a
    /// strategy selector.
    pub const ALL: [Strategy; 4] = [
        Strategy::Fastest,
        Strategy::Impact,
        Strategy::Deadline,
        Strategy::Smart,
    ];

    /// Resolves a wire name, falling back to [`Strategy::Smart`] for
    /// anything unrecognized. Never fails.
    pub fn parse(name: &str) -> Strategy {
        match name {
            "fastest" => Strategy::Fastest,
            "impact" => Strategy::Impact,
            "deadline" => Strategy::Deadline,
            _ => Strategy::Smart,
        }
    }

    /// The lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Fastest => "fastest",
            Strategy::Impact => "impact",
            Strategy::Deadline => "deadline",
            Strategy::Smart => "smart",
        }
    }

    /// The display label used in explanations.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Fastest => "Fastest Wins",
            Strategy::Impact => "High Impact",
            Strategy::Deadline => "Deadline Driven",
            Strategy::Smart => "Smart Balance",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Smart
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
