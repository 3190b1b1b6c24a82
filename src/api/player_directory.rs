use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::RawValue;

/// Player identifier as issued by the shot feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// League-wide player row exactly as fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_title: Option<RawValue>,
}

impl RawPlayer {
    #[must_use]
    pub fn new(id: &str, player_name: &str, team_title: &str) -> Self {
        Self {
            id: Some(RawValue::from(id)),
            player_name: Some(RawValue::from(player_name)),
            team_title: Some(RawValue::from(team_title)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
}

/// Players of one league season keyed by id, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerDirectory {
    entries: IndexMap<PlayerId, PlayerEntry>,
}

impl PlayerDirectory {
    /// Builds the directory, skipping rows without id, name or team.
    ///
    /// A repeated id keeps its first position and takes the latest row.
    #[must_use]
    pub fn from_raw(rows: &[RawPlayer]) -> Self {
        let mut entries = IndexMap::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let fields = (
                row.id.as_ref().and_then(RawValue::as_text),
                row.player_name.as_ref().and_then(RawValue::as_text),
                row.team_title.as_ref().and_then(RawValue::as_text),
            );
            match fields {
                (Some(id), Some(name), Some(team)) => {
                    let id = PlayerId::new(id);
                    entries.insert(id.clone(), PlayerEntry { id, name, team });
                }
                _ => warn!(index, "skipping incomplete player row"),
            }
        }
        debug!(
            input_count = rows.len(),
            players = entries.len(),
            "built player directory"
        );
        Self { entries }
    }

    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = PlayerEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.id.clone(), entry))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&PlayerEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerEntry> {
        self.entries.values()
    }

    /// Distinct team names, sorted.
    #[must_use]
    pub fn teams(&self) -> Vec<&str> {
        self.entries
            .values()
            .map(|entry| entry.team.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn players_for_team(&self, team: &str) -> Vec<&PlayerEntry> {
        self.entries
            .values()
            .filter(|entry| entry.team == team)
            .collect()
    }

    #[must_use]
    pub fn find_by_name(&self, team: &str, name: &str) -> Option<&PlayerEntry> {
        self.entries
            .values()
            .find(|entry| entry.team == team && entry.name == name)
    }
}
