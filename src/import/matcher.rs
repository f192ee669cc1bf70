// Normalized-name lookup against the player directory.
//
// Import rows spell names however the exporting site did ("Luka Doncic",
// "luka dončić", trailing spaces). Both sides are folded to a canonical
// form before comparison: diacritics stripped, case-folded, whitespace
// collapsed.

use std::collections::HashMap;

use tracing::warn;

use crate::schedule::DirectoryPlayer;

/// Strip a diacritic down to its ASCII base, for the Latin letters that
/// actually occur in NBA rosters. Returns `None` for characters that need
/// no folding.
fn fold_diacritic(c: char) -> Option<&'static str> {
    let folded = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'į' => "i",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' | 'ő' => "o",
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ç' | 'ć' | 'č' => "c",
        'ñ' | 'ń' | 'ņ' => "n",
        'š' | 'ş' | 'ś' => "s",
        'ž' | 'ź' | 'ż' => "z",
        'đ' | 'ď' => "d",
        'ğ' | 'ģ' => "g",
        'ķ' => "k",
        'ļ' | 'ľ' | 'ł' => "l",
        'ŕ' | 'ř' => "r",
        'ţ' | 'ť' => "t",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        _ => return None,
    };
    Some(folded)
}

/// Canonical form of a player name: trimmed, lower-cased, diacritics
/// stripped, internal whitespace runs collapsed to a single space.
pub fn normalize_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for c in input.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        match fold_diacritic(c) {
            Some(s) => out.push_str(s),
            None => out.push(c),
        }
    }
    out
}

/// Directory lookup keyed by normalized name.
pub struct NameIndex {
    by_name: HashMap<String, i64>,
}

impl NameIndex {
    /// Index the directory. When two distinct players normalize to the same
    /// name, the first entry wins and the collision is logged; the
    /// ambiguous name will still resolve, just deterministically.
    pub fn build(directory: &[DirectoryPlayer]) -> Self {
        let mut by_name: HashMap<String, i64> = HashMap::new();
        for player in directory {
            let key = normalize_name(&player.name);
            if key.is_empty() {
                continue;
            }
            if let Some(existing) = by_name.get(&key) {
                if *existing != player.player_id {
                    warn!(
                        name = %player.name,
                        kept = existing,
                        dropped = player.player_id,
                        "ambiguous player name in directory"
                    );
                }
                continue;
            }
            by_name.insert(key, player.player_id);
        }
        NameIndex { by_name }
    }

    /// Resolve a free-text name to a player id.
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.by_name.get(&normalize_name(name)).copied()
    }
}
