// Historical pick import: name matching, recency-filtered merge, TSV glue.
//
// Rows arrive with free-text player names. The pipeline matches them
// against the player directory, hands matched candidates to the
// reconciler, and reports unmatched names back as data, not errors.

pub mod matcher;
pub mod reconciler;
pub mod tsv;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::picks::PickStore;
use crate::schedule::DirectoryPlayer;
use crate::store::KeyValueStore;

use matcher::NameIndex;
use reconciler::{reconcile, ImportCandidate};

/// One row of an externally-sourced pick history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    pub date: NaiveDate,
    pub player: String,
}

/// What an import did, in the shape the presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub unmatched: Vec<String>,
}

/// Match `rows` against `directory`, merge the matched candidates into the
/// pick log under the 30-day recency filter, and persist the merged log.
///
/// `wall_clock_date` is the user's local date, not the Eastern schedule
/// date; the recency filter deliberately runs on the wall clock (see
/// `crate::clock`).
pub fn run_import<S: KeyValueStore>(
    picks: &PickStore<S>,
    directory: &[DirectoryPlayer],
    rows: &[ImportRow],
    wall_clock_date: NaiveDate,
) -> anyhow::Result<ImportReport> {
    let index = NameIndex::build(directory);

    let mut candidates = Vec::new();
    let mut unmatched = Vec::new();
    for row in rows {
        match index.lookup(&row.player) {
            Some(player_id) => candidates.push(ImportCandidate {
                player_id,
                date: row.date,
            }),
            None => unmatched.push(row.player.clone()),
        }
    }

    let (merged, counts) = reconcile(picks.get_all(), &candidates, wall_clock_date);
    picks.replace_all(&merged)?;

    debug!(
        imported = counts.imported,
        skipped = counts.skipped,
        unmatched = unmatched.len(),
        "import complete"
    );

    Ok(ImportReport {
        imported: counts.imported,
        skipped: counts.skipped,
        unmatched,
    })
}
