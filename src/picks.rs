// The pick log: one user decision per calendar date.
//
// The log is persisted as a JSON array under a single key-value entry.
// Dates are the natural key: writing a pick for a date that already has an
// entry replaces it entirely, so the log never holds two decisions for the
// same day.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::KeyValueStore;

/// Storage key for the serialized pick log.
pub const PICKS_KEY: &str = "ttfl-picks";

/// Sentinel player id recording "no player, date explicitly skipped".
pub const SKIP_PLAYER_ID: i64 = -1;

/// A single pick decision for exactly one calendar date.
///
/// Dates are schedule dates (US Eastern, NBA-aligned), not the user's local
/// timezone. Wire form uses camelCase keys, with `isSkipped` omitted when
/// false, matching the stored JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub player_id: i64,
    pub date: NaiveDate,
    /// True iff this entry records a deliberate non-pick rather than a
    /// player selection.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_skipped: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Pick {
    /// A regular player selection.
    pub fn player(player_id: i64, date: NaiveDate) -> Self {
        Pick {
            player_id,
            date,
            is_skipped: false,
        }
    }

    /// A deliberate non-pick for `date`.
    pub fn skipped(date: NaiveDate) -> Self {
        Pick {
            player_id: SKIP_PLAYER_ID,
            date,
            is_skipped: true,
        }
    }
}

/// CRUD over the pick log; the single source of truth for user decisions.
///
/// Every mutation is a full read-modify-write of the serialized log. Callers
/// on platforms with genuine multi-threaded storage access must treat each
/// mutation as a critical section to preserve the one-pick-per-date
/// invariant.
pub struct PickStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PickStore<S> {
    pub fn new(store: S) -> Self {
        PickStore { store }
    }

    /// The full pick log. Insertion order carries no meaning.
    ///
    /// Fails soft: absent or unparsable storage reads as an empty log
    /// rather than an error, so a corrupt record can never brick the app.
    pub fn get_all(&self) -> Vec<Pick> {
        let raw = match self.store.get(PICKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("pick log unreadable, treating as empty: {err:#}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(picks) => picks,
            Err(err) => {
                warn!("pick log corrupt, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// The entry for `date`, if any.
    pub fn get_for_date(&self, date: NaiveDate) -> Option<Pick> {
        self.get_all().into_iter().find(|p| p.date == date)
    }

    /// Record a player selection for `date`, replacing any existing entry
    /// for that date. Idempotent in effect.
    pub fn save(&self, player_id: i64, date: NaiveDate) -> Result<()> {
        self.put(Pick::player(player_id, date))
    }

    /// Record a deliberate non-pick for `date`, replacing any existing
    /// entry for that date.
    pub fn skip(&self, date: NaiveDate) -> Result<()> {
        self.put(Pick::skipped(date))
    }

    /// Delete the entry for `date` if present; no-op otherwise.
    pub fn remove(&self, date: NaiveDate) -> Result<()> {
        let mut picks = self.get_all();
        picks.retain(|p| p.date != date);
        self.write(&picks)
    }

    /// Replace the entire stored log. Used by the import reconciler, which
    /// persists its merged map as the new full collection.
    pub fn replace_all(&self, picks: &[Pick]) -> Result<()> {
        self.write(picks)
    }

    fn put(&self, pick: Pick) -> Result<()> {
        let mut picks = self.get_all();
        picks.retain(|p| p.date != pick.date);
        picks.push(pick);
        self.write(&picks)
    }

    fn write(&self, picks: &[Pick]) -> Result<()> {
        let raw = serde_json::to_string(picks).context("failed to serialize pick log")?;
        self.store.set(PICKS_KEY, &raw)
    }
}
