use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commentary::Commentary;
use crate::core::{
    HalfPitchProjection, PitchArea, RawShot, SeasonStats, filter_season, normalize_shots,
};
use crate::error::ShotMapResult;

use super::{
    MarkerSpec, STAT_COUNT, ShotMapConfig, ShotMapLayout, ShotMapSelection, compose_layout,
    map_shots,
};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotMap {
    pub selection: ShotMapSelection,
    pub stats: SeasonStats,
    pub markers: Vec<MarkerSpec>,
    pub pitch_area: PitchArea,
    pub layout: ShotMapLayout,
    pub commentary: Commentary,
    /// Raw entries rejected by the normalizer.
    pub dropped_records: usize,
}

impl ShotMap {
    /// Runs the full pipeline over one fetched batch.
    ///
    /// Malformed entries are dropped and an empty season yields a zero-valued
    /// map; only an invalid config is an error.
    pub fn build(
        selection: ShotMapSelection,
        raw_shots: &[RawShot],
        config: &ShotMapConfig,
    ) -> ShotMapResult<Self> {
        config.validate()?;

        let normalized = normalize_shots(raw_shots);
        let season_shots = filter_season(&normalized.records, &selection.season.id());
        let stats = SeasonStats::from_shots(&season_shots);

        let layout = compose_layout(STAT_COUNT, config.viewport, &config.legend)?;
        let projection = HalfPitchProjection::fit(layout.pitch, config.viewport, config.pitch)?;
        let markers = map_shots(&season_shots, &config.marker_style(), &projection);
        let commentary = Commentary::evaluate_with(&stats, &config.thresholds);

        debug!(
            player = %selection.player_name,
            league = %selection.league,
            season = %selection.season,
            shots = stats.total_shots,
            goals = stats.total_goals,
            dropped = normalized.dropped.len(),
            "built shot map"
        );

        Ok(Self {
            selection,
            stats,
            markers,
            pitch_area: projection.area(),
            layout,
            commentary,
            dropped_records: normalized.dropped.len(),
        })
    }
}
