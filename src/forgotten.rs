// Forgotten-date detection: game days with no recorded decision.
//
// Advisory feature. A missing snapshot degrades to an empty result rather
// than an error.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::picks::Pick;
use crate::schedule::Snapshot;

/// How far back the detector looks, in days.
pub const LOOKBACK_DAYS: i64 = 30;

/// Dates strictly before `current_date` (offsets 1..=30) that had at least
/// one game but no log entry, pick or skip. Ascending, so the oldest
/// unresolved gap surfaces first.
///
/// `current_date` itself is excluded: the user cannot have "forgotten" the
/// day still in progress.
pub fn forgotten_dates(
    log: &[Pick],
    snapshot: Option<&Snapshot>,
    current_date: NaiveDate,
) -> Vec<NaiveDate> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };

    let decided: HashSet<NaiveDate> = log.iter().map(|p| p.date).collect();

    let mut forgotten: Vec<NaiveDate> = (1..=LOOKBACK_DAYS)
        .map(|offset| current_date - Duration::days(offset))
        .filter(|d| !decided.contains(d) && snapshot.has_games_on(*d))
        .collect();
    forgotten.sort_unstable();
    forgotten
}
