use std::fmt;

use serde::{Deserialize, Serialize};

/// Competition season identifier as reported by the shot source (`"2023"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(String);

impl SeasonId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeasonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Two-valued shot result. Only a scored shot is distinguished downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotOutcome {
    Goal,
    NoGoal,
}

impl ShotOutcome {
    /// Collapses the source result vocabulary; only the exact `"Goal"` literal scores.
    #[must_use]
    pub fn from_source_result(result: Option<&str>) -> Self {
        match result {
            Some("Goal") => Self::Goal,
            _ => Self::NoGoal,
        }
    }

    #[must_use]
    pub fn is_goal(self) -> bool {
        matches!(self, Self::Goal)
    }
}

/// Optional shot context carried through from the source untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotContext {
    pub id: Option<String>,
    pub minute: Option<u16>,
    pub situation: Option<String>,
    pub shot_type: Option<String>,
}

/// One validated shot attempt.
///
/// Coordinates and `expected_goals` are guaranteed finite and inside `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub season_id: SeasonId,
    pub position_x: f64,
    pub position_y: f64,
    pub expected_goals: f64,
    pub outcome: ShotOutcome,
    #[serde(default)]
    pub context: ShotContext,
}

impl ShotRecord {
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.outcome.is_goal()
    }
}
