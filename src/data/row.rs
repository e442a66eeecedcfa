//! One line of the stats file decoded into a zero-padded integer row.

use crate::data::text_table::parse_leading_int;

/// Rows shorter than this are zero-filled so every column lookup is in range.
pub const MIN_ROW_WIDTH: usize = 120;

const COMMENT_MARKER: &str = "//";

/// A field that had no leading integer and was coerced to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercedField {
    pub column: usize,
    pub raw: String,
}

/// Non-numeric fields read as 0 through [`EnemyRow::get`] but stay marked,
/// so checks that need a genuine zero can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyRow {
    values: Vec<i64>,
    non_numeric: Vec<usize>,
}

impl EnemyRow {
    pub fn from_values(mut values: Vec<i64>) -> Self {
        if values.len() < MIN_ROW_WIDTH {
            values.resize(MIN_ROW_WIDTH, 0);
        }
        EnemyRow {
            values,
            non_numeric: Vec::new(),
        }
    }

    /// Mark `columns` as fields that held no number.
    pub fn with_non_numeric(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.non_numeric.extend(columns);
        self.non_numeric.sort_unstable();
        self.non_numeric.dedup();
        self
    }

    /// Value at `column`; columns past the end read as zero.
    pub fn get(&self, column: usize) -> i64 {
        self.values.get(column).copied().unwrap_or(0)
    }

    pub fn is_non_numeric(&self, column: usize) -> bool {
        self.non_numeric.binary_search(&column).is_ok()
    }

    /// True only for a real 0 (padding included), never for a non-numeric field.
    pub fn is_zero(&self, column: usize) -> bool {
        self.get(column) == 0 && !self.is_non_numeric(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

/// Everything before the first `//`, trimmed.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

/// Split a comment-free line on commas. Quotes carry no meaning in this format.
pub fn split_fields(line: &str) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        // An empty line still holds one (empty) field.
        None => Ok(vec![String::new()]),
    }
}

/// Decode one stats line. Non-numeric fields become zero, are marked on the
/// row, and are returned alongside it so the caller can report them.
pub fn parse_row(line: &str) -> Result<(EnemyRow, Vec<CoercedField>), csv::Error> {
    let fields = split_fields(strip_comment(line))?;
    let mut coerced = Vec::new();
    let values = fields
        .into_iter()
        .enumerate()
        .map(|(column, raw)| {
            parse_leading_int(&raw).unwrap_or_else(|| {
                coerced.push(CoercedField { column, raw });
                0
            })
        })
        .collect();
    let row = EnemyRow::from_values(values).with_non_numeric(coerced.iter().map(|f| f.column));
    Ok((row, coerced))
}
