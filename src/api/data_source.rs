use std::collections::HashMap;

use crate::core::RawShot;
use crate::error::ShotMapResult;

use super::{League, PlayerId, RawPlayer, Season};

/// Fetch collaborator injected into the engine.
///
/// Calls are synchronous: the pipeline starts once the data has arrived.
pub trait ShotDataSource {
    fn league_players(&self, league: League, season: &Season) -> ShotMapResult<Vec<RawPlayer>>;

    fn player_shots(&self, player_id: &PlayerId) -> ShotMapResult<Vec<RawShot>>;
}

impl<S: ShotDataSource + ?Sized> ShotDataSource for &S {
    fn league_players(&self, league: League, season: &Season) -> ShotMapResult<Vec<RawPlayer>> {
        (**self).league_players(league, season)
    }

    fn player_shots(&self, player_id: &PlayerId) -> ShotMapResult<Vec<RawShot>> {
        (**self).player_shots(player_id)
    }
}

/// In-memory source for headless runs and tests.
///
/// Unknown league seasons and players resolve to empty batches.
#[derive(Debug, Clone, Default)]
pub struct StaticShotDataSource {
    players: HashMap<(League, Season), Vec<RawPlayer>>,
    shots: HashMap<PlayerId, Vec<RawShot>>,
}

impl StaticShotDataSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_players(mut self, league: League, season: Season, players: Vec<RawPlayer>) -> Self {
        self.players.insert((league, season), players);
        self
    }

    #[must_use]
    pub fn with_shots(mut self, player_id: PlayerId, shots: Vec<RawShot>) -> Self {
        self.shots.insert(player_id, shots);
        self
    }
}

impl ShotDataSource for StaticShotDataSource {
    fn league_players(&self, league: League, season: &Season) -> ShotMapResult<Vec<RawPlayer>> {
        Ok(self
            .players
            .get(&(league, season.clone()))
            .cloned()
            .unwrap_or_default())
    }

    fn player_shots(&self, player_id: &PlayerId) -> ShotMapResult<Vec<RawShot>> {
        Ok(self.shots.get(player_id).cloned().unwrap_or_default())
    }
}
