use tracing::debug;

use crate::core::shot::{SeasonId, ShotRecord};

/// Keeps the shots taken in `season`, preserving their order.
///
/// An empty result is a valid outcome; downstream aggregation handles it.
#[must_use]
pub fn filter_season(records: &[ShotRecord], season: &SeasonId) -> Vec<ShotRecord> {
    let selected: Vec<ShotRecord> = records
        .iter()
        .filter(|record| &record.season_id == season)
        .cloned()
        .collect();
    debug!(
        season = %season,
        input_count = records.len(),
        selected = selected.len(),
        "filtered shots by season"
    );
    selected
}
