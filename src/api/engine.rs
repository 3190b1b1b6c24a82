use tracing::debug;

use crate::error::{ShotMapError, ShotMapResult};
use crate::render::Renderer;

use super::{
    League, PlayerDirectory, PlayerEntry, PlayerId, Season, ShotDataSource, ShotMap,
    ShotMapConfig, ShotMapSelection, build_render_frame,
};

/// Orchestration facade consumed by host applications.
///
/// The data source and renderer are injected; every `compose` call rebuilds
/// its result from scratch, so no state carries over between renders.
pub struct ShotMapEngine<S: ShotDataSource, R: Renderer> {
    source: S,
    renderer: R,
    config: ShotMapConfig,
}

impl<S: ShotDataSource, R: Renderer> ShotMapEngine<S, R> {
    pub fn new(source: S, renderer: R, config: ShotMapConfig) -> ShotMapResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            renderer,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ShotMapConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ShotMapConfig) -> ShotMapResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn player_directory(&self, league: League, season: &Season) -> ShotMapResult<PlayerDirectory> {
        let rows = self.source.league_players(league, season)?;
        Ok(PlayerDirectory::from_raw(&rows))
    }

    /// Fetches and builds the shot map of one player of the league season.
    pub fn compose(
        &self,
        league: League,
        season: &Season,
        player_id: &PlayerId,
    ) -> ShotMapResult<ShotMap> {
        let directory = self.player_directory(league, season)?;
        let entry = directory
            .get(player_id)
            .ok_or_else(|| ShotMapError::UnknownPlayer(player_id.to_string()))?;
        self.compose_for(league, season, entry)
    }

    /// Builds the shot map of an already resolved directory entry.
    pub fn compose_for(
        &self,
        league: League,
        season: &Season,
        player: &PlayerEntry,
    ) -> ShotMapResult<ShotMap> {
        let raw_shots = self.source.player_shots(&player.id)?;
        debug!(
            player_id = %player.id,
            fetched = raw_shots.len(),
            "fetched player shots"
        );
        let selection = ShotMapSelection::new(league, season.clone(), player.name.clone());
        ShotMap::build(selection, &raw_shots, &self.config)
    }

    pub fn render(&mut self, map: &ShotMap) -> ShotMapResult<()> {
        let frame = build_render_frame(map, &self.config)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
