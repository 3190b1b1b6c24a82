use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SeasonId;
use crate::error::{ShotMapError, ShotMapResult};

/// Competitions covered by the shot feed, with their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "EPL")]
    Epl,
    #[serde(rename = "La_Liga")]
    LaLiga,
    #[serde(rename = "Bundesliga")]
    Bundesliga,
    #[serde(rename = "Serie_A")]
    SerieA,
    #[serde(rename = "Ligue_1")]
    Ligue1,
    #[serde(rename = "RFPL")]
    Rfpl,
}

impl League {
    pub const ALL: [Self; 6] = [
        Self::Epl,
        Self::LaLiga,
        Self::Bundesliga,
        Self::SerieA,
        Self::Ligue1,
        Self::Rfpl,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Epl => "EPL",
            Self::LaLiga => "La_Liga",
            Self::Bundesliga => "Bundesliga",
            Self::SerieA => "Serie_A",
            Self::Ligue1 => "Ligue_1",
            Self::Rfpl => "RFPL",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = ShotMapError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|league| league.as_str() == value.trim())
            .ok_or_else(|| ShotMapError::UnsupportedSelection(format!("unknown league `{value}`")))
    }
}

/// Seasons offered for selection, keyed by their starting year.
pub const SUPPORTED_SEASONS: [&str; 6] = ["2019", "2020", "2021", "2022", "2023", "2024"];

/// A season from the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Season(String);

impl Season {
    pub fn new(value: &str) -> ShotMapResult<Self> {
        let value = value.trim();
        if SUPPORTED_SEASONS.contains(&value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(ShotMapError::UnsupportedSelection(format!(
                "unsupported season `{value}`"
            )))
        }
    }

    pub fn supported() -> impl Iterator<Item = Self> {
        SUPPORTED_SEASONS
            .into_iter()
            .map(|season| Self(season.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier used to match shot records of this season.
    #[must_use]
    pub fn id(&self) -> SeasonId {
        SeasonId::new(self.0.as_str())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = ShotMapError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for Season {
    type Error = ShotMapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Season> for String {
    fn from(value: Season) -> Self {
        value.0
    }
}

/// Fully resolved choice handed over by the selection UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotMapSelection {
    pub league: League,
    pub season: Season,
    pub player_name: String,
}

impl ShotMapSelection {
    #[must_use]
    pub fn new(league: League, season: Season, player_name: impl Into<String>) -> Self {
        Self {
            league,
            season,
            player_name: player_name.into(),
        }
    }

    /// Subtitle shown under the player name.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("All shots in the {} {} season", self.league, self.season)
    }
}
