use serde::{Deserialize, Serialize};

use crate::core::SeasonStats;
use crate::error::{ShotMapError, ShotMapResult};

/// Tag identifying which rule produced a remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemarkKind {
    LowVolume,
    FinishingAbility,
    NoGoals,
    ChanceCreation,
    NoChances,
    ShotAccuracy,
    ChanceQuality,
    VolumeSeeking,
    KeepItUp,
}

/// One generated commentary line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remark {
    pub kind: RemarkKind,
    pub text: String,
}

impl Remark {
    #[must_use]
    pub fn new(kind: RemarkKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Numeric cut-offs shared by the rules. Every comparison is strict `<`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommentaryThresholds {
    pub low_volume_shots: u32,
    pub min_conversion_rate: f64,
    pub min_xg_per_shot: f64,
    pub min_total_xg: f64,
}

impl Default for CommentaryThresholds {
    fn default() -> Self {
        Self {
            low_volume_shots: 10,
            min_conversion_rate: 0.2,
            min_xg_per_shot: 0.1,
            min_total_xg: 5.0,
        }
    }
}

impl CommentaryThresholds {
    pub fn validate(self) -> ShotMapResult<Self> {
        for (value, name) in [
            (self.min_conversion_rate, "min_conversion_rate"),
            (self.min_xg_per_shot, "min_xg_per_shot"),
            (self.min_total_xg, "min_total_xg"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ShotMapError::InvalidConfig(format!(
                    "commentary threshold `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationRule {
    LowVolume,
    Finishing,
    ChanceCreation,
}

impl ObservationRule {
    pub const ORDERED: [Self; 3] = [Self::LowVolume, Self::Finishing, Self::ChanceCreation];

    #[must_use]
    pub fn evaluate(self, stats: &SeasonStats, thresholds: &CommentaryThresholds) -> Option<Remark> {
        match self {
            Self::LowVolume => (stats.total_shots < thresholds.low_volume_shots).then(|| {
                Remark::new(
                    RemarkKind::LowVolume,
                    format!(
                        "The player has taken fewer than {} shots this season, indicating limited goal-scoring opportunities.",
                        thresholds.low_volume_shots
                    ),
                )
            }),
            // Exactly one branch of the pair fires.
            Self::Finishing => Some(if stats.total_goals > 0 {
                Remark::new(
                    RemarkKind::FinishingAbility,
                    "The player has successfully converted some chances into goals, showcasing their finishing ability.",
                )
            } else {
                Remark::new(
                    RemarkKind::NoGoals,
                    "The player has not scored any goals yet this season, highlighting a need for improvement in finishing.",
                )
            }),
            Self::ChanceCreation => Some(if stats.total_xg > 0.0 {
                Remark::new(
                    RemarkKind::ChanceCreation,
                    format!(
                        "The player's expected goals (xG) total is {:.2}, which suggests they are creating scoring chances.",
                        stats.total_xg
                    ),
                )
            } else {
                Remark::new(
                    RemarkKind::NoChances,
                    "The player has yet to create significant goal-scoring opportunities this season.",
                )
            }),
        }
    }
}

/// Recommendation rules. None of them is evaluated for an empty shot set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationRule {
    ShotAccuracy,
    ChanceQuality,
    VolumeSeeking,
}

impl RecommendationRule {
    pub const ORDERED: [Self; 3] = [Self::ShotAccuracy, Self::ChanceQuality, Self::VolumeSeeking];

    #[must_use]
    pub fn evaluate(self, stats: &SeasonStats, thresholds: &CommentaryThresholds) -> Option<Remark> {
        if !stats.has_shots() {
            return None;
        }
        match self {
            Self::ShotAccuracy => stats
                .conversion_rate()
                .filter(|rate| *rate < thresholds.min_conversion_rate)
                .map(|_| {
                    Remark::new(
                        RemarkKind::ShotAccuracy,
                        format!(
                            "Consider improving shot accuracy, as currently, less than {}% of shots are resulting in goals.",
                            percent(thresholds.min_conversion_rate)
                        ),
                    )
                }),
            Self::ChanceQuality => (stats.xg_per_shot < thresholds.min_xg_per_shot).then(|| {
                Remark::new(
                    RemarkKind::ChanceQuality,
                    format!(
                        "Focus on taking higher quality chances, as the average xG per shot is below {}.",
                        thresholds.min_xg_per_shot
                    ),
                )
            }),
            Self::VolumeSeeking => (stats.total_xg < thresholds.min_total_xg).then(|| {
                Remark::new(
                    RemarkKind::VolumeSeeking,
                    "Aim to increase total xG by seeking more goal-scoring opportunities.",
                )
            }),
        }
    }
}

/// Line used when no recommendation rule fires.
#[must_use]
pub fn keep_it_up() -> Remark {
    Remark::new(
        RemarkKind::KeepItUp,
        "Keep up the great work! Your shooting and goal-scoring abilities are on point.",
    )
}

fn percent(ratio: f64) -> String {
    let value = ratio * 100.0;
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
