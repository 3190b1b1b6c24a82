use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::shot::ShotRecord;

/// Season aggregate for one player. Values are stored unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeasonStats {
    pub total_shots: u32,
    pub total_goals: u32,
    pub total_xg: f64,
    pub xg_per_shot: f64,
}

impl SeasonStats {
    /// Aggregates a filtered shot set in one pass.
    #[must_use]
    pub fn from_shots(shots: &[ShotRecord]) -> Self {
        let mut total_shots = 0u32;
        let mut total_goals = 0u32;
        let mut total_xg = 0.0f64;

        for shot in shots {
            total_shots = total_shots.saturating_add(1);
            if shot.is_goal() {
                total_goals = total_goals.saturating_add(1);
            }
            total_xg += shot.expected_goals;
        }

        Self {
            total_shots,
            total_goals,
            total_xg,
            xg_per_shot: guarded_ratio(total_xg, total_shots),
        }
    }

    /// Share of shots that became goals, `None` without any shot.
    #[must_use]
    pub fn conversion_rate(self) -> Option<f64> {
        (self.total_shots > 0).then(|| f64::from(self.total_goals) / f64::from(self.total_shots))
    }

    #[must_use]
    pub fn has_shots(self) -> bool {
        self.total_shots > 0
    }

    /// Entries shown in the stat strip under the pitch, in display order.
    #[must_use]
    pub fn strip_entries(self) -> [StatEntry; 4] {
        [
            StatEntry::count("Shots", self.total_shots),
            StatEntry::count("Goals", self.total_goals),
            StatEntry::amount("xG", self.total_xg),
            StatEntry::amount("xG/Shot", self.xg_per_shot),
        ]
    }

    /// Plain-text summary lines shown below the chart.
    #[must_use]
    pub fn summary_lines(self) -> [String; 4] {
        [
            format!("Total Shots: {}", StatValue::Count(self.total_shots)),
            format!("Total Goals: {}", StatValue::Count(self.total_goals)),
            format!("Total xG: {}", StatValue::Amount(self.total_xg)),
            format!("xG per Shot: {}", StatValue::Amount(self.xg_per_shot)),
        ]
    }
}

fn guarded_ratio(numerator: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        numerator / f64::from(count)
    }
}

/// Displayable stat value. Counts print as integers, amounts with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatValue {
    Count(u32),
    Amount(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(value) => write!(f, "{value}"),
            Self::Amount(value) => write!(f, "{value:.2}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatEntry {
    pub label: &'static str,
    pub value: StatValue,
}

impl StatEntry {
    #[must_use]
    pub const fn count(label: &'static str, value: u32) -> Self {
        Self {
            label,
            value: StatValue::Count(value),
        }
    }

    #[must_use]
    pub const fn amount(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value: StatValue::Amount(value),
        }
    }

    #[must_use]
    pub fn formatted_value(&self) -> String {
        self.value.to_string()
    }
}
