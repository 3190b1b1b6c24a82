use serde::{Deserialize, Serialize};

use crate::core::{
    FieldPoint, HalfPitchProjection, PixelPoint, ShotOutcome, ShotRecord,
    field_point_from_normalized,
};
use crate::render::Color;

/// Which fill a marker takes; scored shots are highlighted, the rest stay hollow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerFill {
    GoalHighlight,
    Void,
}

impl MarkerFill {
    #[must_use]
    pub fn for_outcome(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Goal => Self::GoalHighlight,
            ShotOutcome::NoGoal => Self::Void,
        }
    }
}

/// Resolved style applied to every pitch marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size_per_xg: f64,
    pub alpha: f64,
    pub edge_width: f64,
    pub goal_fill: Color,
    pub void_fill: Color,
    pub edge: Color,
}

impl MarkerStyle {
    #[must_use]
    pub fn fill_color(&self, fill: MarkerFill) -> Color {
        match fill {
            MarkerFill::GoalHighlight => self.goal_fill,
            MarkerFill::Void => self.void_fill,
        }
    }
}

/// Rendering directive for one shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub field: FieldPoint,
    pub pixel: PixelPoint,
    /// Marker area in points², linear in xG.
    pub size: f64,
    pub fill: MarkerFill,
    pub fill_color: Color,
    pub edge_color: Color,
    pub edge_width: f64,
    pub alpha: f64,
    pub outcome: ShotOutcome,
    pub in_attacking_half: bool,
}

/// Maps one validated shot to its marker. Every shot yields exactly one marker.
#[must_use]
pub fn map_shot(
    shot: &ShotRecord,
    style: &MarkerStyle,
    projection: &HalfPitchProjection,
) -> MarkerSpec {
    let field = field_point_from_normalized(shot.position_x, shot.position_y);
    let fill = MarkerFill::for_outcome(shot.outcome);
    MarkerSpec {
        field,
        pixel: projection.project(field),
        size: style.size_per_xg * shot.expected_goals,
        fill,
        fill_color: style.fill_color(fill),
        edge_color: style.edge,
        edge_width: style.edge_width,
        alpha: style.alpha,
        outcome: shot.outcome,
        in_attacking_half: field.in_attacking_half(),
    }
}

/// Maps shots in input order.
#[must_use]
pub fn map_shots(
    shots: &[ShotRecord],
    style: &MarkerStyle,
    projection: &HalfPitchProjection,
) -> Vec<MarkerSpec> {
    shots
        .iter()
        .map(|shot| map_shot(shot, style, projection))
        .collect()
}
