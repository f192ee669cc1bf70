// TSV glue for pick-history exports.
//
// Exports are tab-separated with a header row; the columns we care about
// are `date` (YYYY-MM-DD) and `player`. Extra columns are ignored.

use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::ImportRow;

#[derive(Debug, Error)]
pub enum TsvError {
    #[error("failed to read import file: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid date `{value}` in row {row}")]
    InvalidDate { value: String, row: usize },
}

/// Raw row as exported. Dates stay strings here so a malformed value can be
/// reported with its row number.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "Date")]
    date: String,
    #[serde(alias = "Player", alias = "player_name")]
    player: String,
    /// Absorb any extra columns the export includes.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Parse an export into import rows, ready for the matcher.
pub fn read_import_rows<R: Read>(reader: R) -> Result<Vec<ImportRow>, TsvError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, record) in rdr.deserialize::<RawRow>().enumerate() {
        let raw = record?;
        let date: NaiveDate = raw.date.parse().map_err(|_| TsvError::InvalidDate {
            value: raw.date.clone(),
            row: idx + 1,
        })?;
        rows.push(ImportRow {
            date,
            player: raw.player,
        });
    }
    Ok(rows)
}
