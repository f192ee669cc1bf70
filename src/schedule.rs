// Season snapshot: the read-only, externally supplied schedule data.
//
// The snapshot is fetched whole and atomically replaced on each fetch; the
// engine never observes a partial one. Field names mirror the backend's
// `/api/snapshot` JSON.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot bookkeeping emitted by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub total_players: usize,
    #[serde(default)]
    pub total_games: usize,
    #[serde(default)]
    pub total_teams: usize,
    #[serde(default)]
    pub injury_updated_at: Option<String>,
    /// Earliest tip-off per date (ISO instants), keyed by `YYYY-MM-DD`.
    #[serde(default)]
    pub earliest_game_times: HashMap<String, String>,
}

/// A player row in the snapshot, with rolling TTFL scoring averages and
/// injury flags as precomputed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPlayer {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub avg_ttfl: f64,
    #[serde(default)]
    pub avg_ttfl_l10: f64,
    #[serde(default)]
    pub avg_ttfl_l30d: f64,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub injury_return_date: Option<String>,
    #[serde(default)]
    pub injury_details: Option<String>,
}

/// One scheduled game. Team fields are abbreviations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub game_date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_team_id: Option<i64>,
    #[serde(default)]
    pub away_team_id: Option<i64>,
}

/// Team pace and defensive rating, used by eligibility-adjacent display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRatings {
    pub team_id: i64,
    pub abbreviation: String,
    pub full_name: String,
    #[serde(default)]
    pub pace: f64,
    #[serde(default)]
    pub def_rating: f64,
}

/// A player directory entry for import name matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPlayer {
    pub player_id: i64,
    pub name: String,
    pub team: String,
}

/// The full season snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub metadata: SnapshotMetadata,
    pub players: Vec<SnapshotPlayer>,
    pub games: Vec<ScheduledGame>,
    pub teams: Vec<TeamRatings>,
}

impl Snapshot {
    /// All games scheduled on `date`.
    pub fn games_on(&self, date: NaiveDate) -> Vec<&ScheduledGame> {
        self.games.iter().filter(|g| g.game_date == date).collect()
    }

    /// Whether at least one game is scheduled on `date`.
    pub fn has_games_on(&self, date: NaiveDate) -> bool {
        self.games.iter().any(|g| g.game_date == date)
    }

    /// Team abbreviations with a game on `date`.
    pub fn teams_playing_on(&self, date: NaiveDate) -> HashSet<&str> {
        self.games
            .iter()
            .filter(|g| g.game_date == date)
            .flat_map(|g| [g.home_team.as_str(), g.away_team.as_str()])
            .collect()
    }

    /// Players whose team appears in a game on `date`.
    pub fn players_active_on(&self, date: NaiveDate) -> Vec<&SnapshotPlayer> {
        let playing = self.teams_playing_on(date);
        self.players
            .iter()
            .filter(|p| playing.contains(p.team.as_str()))
            .collect()
    }

    /// The name directory used for import matching, derived from the
    /// snapshot's player list.
    pub fn player_directory(&self) -> Vec<DirectoryPlayer> {
        self.players
            .iter()
            .map(|p| DirectoryPlayer {
                player_id: p.player_id,
                name: p.name.clone(),
                team: p.team.clone(),
            })
            .collect()
    }
}
