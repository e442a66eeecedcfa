//! Tab-separated id → text tables: enemy names and enemy descriptions.
//!
//! Format (one entry per line, `\r` tolerated):
//!
//! ```text
//! 000	Doge
//! 001	Snache
//! 002	Those Guys	with an ignored third column
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::data::error::{LoadError, LoadResult};

/// Enemy id → text.
pub type TextTable = HashMap<usize, String>;

/// Read a whole file and drop every carriage return.
pub(crate) fn read_normalized(path: &Path) -> LoadResult<String> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(strip_carriage_returns(&raw))
}

pub(crate) fn strip_carriage_returns(raw: &str) -> String {
    raw.replace('\r', "")
}

/// Leading-integer parse: optional whitespace and sign, then decimal digits.
/// Anything after the digits is ignored; no digits at all yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Identifiers are row positions, so negatives and non-numbers never match.
fn parse_id(raw: &str) -> Option<usize> {
    parse_leading_int(raw).and_then(|id| usize::try_from(id).ok())
}

/// Parse `id<TAB>name` lines. Lines with fewer than two columns are skipped;
/// later duplicates overwrite earlier ones.
pub fn parse_enemy_names(text: &str) -> TextTable {
    let mut names = TextTable::new();
    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 2 {
            continue;
        }
        if let Some(id) = parse_id(cols[0]) {
            names.insert(id, cols[1].trim().to_string());
        }
    }
    names
}

/// Parse `id<TAB>description` lines. Everything after the first tab is the
/// description, embedded tabs included.
pub fn parse_enemy_descriptions(text: &str) -> TextTable {
    let mut descriptions = TextTable::new();
    for line in text.split('\n').map(str::trim) {
        let Some((id, rest)) = line.split_once('\t') else {
            continue;
        };
        if let Some(id) = parse_id(id) {
            descriptions.insert(id, rest.trim().to_string());
        }
    }
    descriptions
}

pub fn load_enemy_names(path: impl AsRef<Path>) -> LoadResult<TextTable> {
    read_normalized(path.as_ref()).map(|text| parse_enemy_names(&text))
}

pub fn load_enemy_descriptions(path: impl AsRef<Path>) -> LoadResult<TextTable> {
    read_normalized(path.as_ref()).map(|text| parse_enemy_descriptions(&text))
}
