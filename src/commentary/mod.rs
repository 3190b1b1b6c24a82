//! Threshold-rule commentary over season aggregates.
//!
//! Each rule is an independent pure predicate producing at most one line; the
//! engine is a plain reduction over the ordered rule lists.

mod rules;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::SeasonStats;

pub use rules::{
    CommentaryThresholds, ObservationRule, RecommendationRule, Remark, RemarkKind, keep_it_up,
};

pub type Remarks = SmallVec<[Remark; 4]>;

/// Ordered observations and recommendations for one season aggregate.
///
/// Neither list is ever empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commentary {
    pub observations: Remarks,
    pub recommendations: Remarks,
}

impl Commentary {
    #[must_use]
    pub fn evaluate(stats: &SeasonStats) -> Self {
        Self::evaluate_with(stats, &CommentaryThresholds::default())
    }

    #[must_use]
    pub fn evaluate_with(stats: &SeasonStats, thresholds: &CommentaryThresholds) -> Self {
        let observations: Remarks = ObservationRule::ORDERED
            .iter()
            .filter_map(|rule| rule.evaluate(stats, thresholds))
            .collect();

        let mut recommendations: Remarks = RecommendationRule::ORDERED
            .iter()
            .filter_map(|rule| rule.evaluate(stats, thresholds))
            .collect();
        if recommendations.is_empty() {
            recommendations.push(keep_it_up());
        }

        trace!(
            observations = observations.len(),
            recommendations = recommendations.len(),
            "evaluated commentary"
        );
        Self {
            observations,
            recommendations,
        }
    }

    #[must_use]
    pub fn observation_kinds(&self) -> Vec<RemarkKind> {
        self.observations.iter().map(|remark| remark.kind).collect()
    }

    #[must_use]
    pub fn recommendation_kinds(&self) -> Vec<RemarkKind> {
        self.recommendations.iter().map(|remark| remark.kind).collect()
    }
}
