// Merge of matched import candidates into the pick log.
//
// Imported data is treated as authoritative for the dates it covers, but
// only inside the 30-day recency window; older rows are dropped so stale
// history cannot resurrect eligibility state outside the window that
// matters. The merge keys on date, so it can never produce two picks for
// the same day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::picks::Pick;

/// Recency filter: candidates dated within `[now - 30 days, now]` merge,
/// everything else is skipped.
pub const IMPORT_WINDOW_DAYS: i64 = 30;

/// A matched candidate: the name has already been resolved to a player id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCandidate {
    pub player_id: i64,
    pub date: NaiveDate,
}

/// Merge counters returned by [`reconcile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCounts {
    pub imported: usize,
    pub skipped: usize,
}

/// Merge `candidates` into `existing`, returning the replacement log and
/// the counts. In-window candidates insert or overwrite at their date key;
/// out-of-window candidates leave any existing entry untouched.
pub fn reconcile(
    existing: Vec<Pick>,
    candidates: &[ImportCandidate],
    wall_clock_date: NaiveDate,
) -> (Vec<Pick>, ImportCounts) {
    // Keying by date re-asserts the natural-key invariant even if the
    // stored log somehow carried a duplicate.
    let mut by_date: BTreeMap<NaiveDate, Pick> =
        existing.into_iter().map(|p| (p.date, p)).collect();

    let mut counts = ImportCounts::default();
    for candidate in candidates {
        let age = (wall_clock_date - candidate.date).num_days();
        if (0..=IMPORT_WINDOW_DAYS).contains(&age) {
            by_date.insert(
                candidate.date,
                Pick::player(candidate.player_id, candidate.date),
            );
            counts.imported += 1;
        } else {
            debug!(date = %candidate.date, age_days = age, "import candidate outside window");
            counts.skipped += 1;
        }
    }

    (by_date.into_values().collect(), counts)
}
