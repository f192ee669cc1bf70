// Pick-eligibility engine: pure functions over the pick log.
//
// A past pick locks a player out for 30 days. The window is open at the
// lower bound and excludes the query date itself: a pick dated `d` locks
// `from_date` iff 0 < (from_date - d) < 30 days. The exclusion of day zero
// means a pick already recorded for `from_date` never blocks queries for
// that same date (it represents today's decision, not a future lock), and
// re-querying future dates counts down correctly as days pass.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::picks::Pick;

/// Length of the player-reuse restriction, in days.
pub const REUSE_WINDOW_DAYS: i64 = 30;

/// Whether `pick` locks out its player on `from_date`. Skips never lock.
fn locks(pick: &Pick, from_date: NaiveDate) -> bool {
    if pick.is_skipped {
        return false;
    }
    let age = (from_date - pick.date).num_days();
    age > 0 && age < REUSE_WINDOW_DAYS
}

/// The most recent non-skipped pick of `player_id` inside the 30-day window
/// trailing `from_date`, or `None` if the player is unencumbered.
pub fn last_locking_pick(log: &[Pick], player_id: i64, from_date: NaiveDate) -> Option<NaiveDate> {
    log.iter()
        .filter(|p| p.player_id == player_id && locks(p, from_date))
        .map(|p| p.date)
        .max()
}

/// True iff `player_id` may legally be picked on `from_date`.
pub fn is_eligible(log: &[Pick], player_id: i64, from_date: NaiveDate) -> bool {
    last_locking_pick(log, player_id, from_date).is_none()
}

/// Days until `player_id` becomes pickable again, counted from `from_date`.
/// `None` when already eligible; otherwise in 1..=29 by construction.
pub fn days_until_eligible(log: &[Pick], player_id: i64, from_date: NaiveDate) -> Option<i64> {
    last_locking_pick(log, player_id, from_date)
        .map(|last| REUSE_WINDOW_DAYS - (from_date - last).num_days())
}

/// Per-player eligibility flags in the shape the presentation layer
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityFlags {
    pub is_eligible: bool,
    pub last_picked_date: Option<NaiveDate>,
    pub days_until_eligible: Option<i64>,
}

impl EligibilityFlags {
    fn eligible() -> Self {
        EligibilityFlags {
            is_eligible: true,
            last_picked_date: None,
            days_until_eligible: None,
        }
    }
}

/// Batch mode for rendering a full roster: one pass over the window-filtered
/// log builds a map keyed by player id, keeping cost linear in log size
/// rather than quadratic in (players x log size). Players absent from the
/// map are eligible; use [`flags_for`] to resolve them.
pub fn eligibility_map(log: &[Pick], from_date: NaiveDate) -> HashMap<i64, EligibilityFlags> {
    let mut last_by_player: HashMap<i64, NaiveDate> = HashMap::new();
    for pick in log.iter().filter(|p| locks(p, from_date)) {
        last_by_player
            .entry(pick.player_id)
            .and_modify(|d| {
                if pick.date > *d {
                    *d = pick.date;
                }
            })
            .or_insert(pick.date);
    }

    last_by_player
        .into_iter()
        .map(|(player_id, last)| {
            (
                player_id,
                EligibilityFlags {
                    is_eligible: false,
                    last_picked_date: Some(last),
                    days_until_eligible: Some(REUSE_WINDOW_DAYS - (from_date - last).num_days()),
                },
            )
        })
        .collect()
}

/// Resolve a single player's flags against a batch map from
/// [`eligibility_map`].
pub fn flags_for(map: &HashMap<i64, EligibilityFlags>, player_id: i64) -> EligibilityFlags {
    map.get(&player_id)
        .cloned()
        .unwrap_or_else(EligibilityFlags::eligible)
}
