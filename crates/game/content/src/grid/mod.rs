//! Row/column addressing over a loosely typed sheet payload.
//!
//! A [`Grid`] is built once from the JSON table of a sheet and never changes.
//! Columns are addressed either by 0-based index or by header label; labels
//! match case-insensitively after trimming, first occurrence wins.
//!
//! Cells are `None` when the payload has no value for them (a `null` cell, a
//! `null` value, or a row shorter than the header).

mod cell;
mod error;
mod raw;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

pub use cell::CellValue;
pub use error::GridError;

use raw::RawSheet;

/// Column selector: a header label or a 0-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column<'a> {
    Label(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Column<'a> {
    fn from(label: &'a str) -> Self {
        Column::Label(label)
    }
}

impl From<usize> for Column<'_> {
    fn from(index: usize) -> Self {
        Column::Index(index)
    }
}

impl fmt::Display for Column<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Label(label) => write!(f, "'{}'", label),
            Column::Index(index) => write!(f, "#{}", index),
        }
    }
}

type Row = Vec<Option<CellValue>>;

/// Immutable sheet grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Row>,
    label_index: HashMap<String, usize>,
}

impl Grid {
    /// Builds a grid from header labels and rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Validation`] if there are no columns or no rows.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Result<Self, GridError> {
        if headers.is_empty() {
            return Err(GridError::Validation("sheet has no columns"));
        }
        if rows.is_empty() {
            return Err(GridError::Validation("sheet has no rows"));
        }

        let mut label_index = HashMap::with_capacity(headers.len());
        for (index, label) in headers.iter().enumerate() {
            let key = normalize_label(label);
            if !key.is_empty() {
                label_index.entry(key).or_insert(index);
            }
        }

        Ok(Self {
            headers: headers.into_iter().map(|h| h.trim().to_string()).collect(),
            rows,
            label_index,
        })
    }

    /// Parses an unwrapped sheet payload `{ "table": { "cols": [...], "rows": [...] } }`.
    pub fn from_json(text: &str) -> Result<Self, GridError> {
        let sheet: RawSheet = serde_json::from_str(text)?;
        let table = sheet
            .table
            .ok_or(GridError::Validation("payload has no table"))?;
        let cols = table
            .cols
            .ok_or(GridError::Validation("table has no cols"))?;
        let rows = table
            .rows
            .ok_or(GridError::Validation("table has no rows"))?;

        let headers = cols
            .into_iter()
            .map(|col| col.map(|c| c.label_text()).unwrap_or_default())
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                row.and_then(|r| r.c)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|cell| {
                        cell.map(|c| c.v)
                            .filter(|v| !v.is_null())
                            .map(CellValue::from)
                    })
                    .collect()
            })
            .collect();

        let grid = Self::new(headers, rows)?;
        tracing::debug!(rows = grid.size(), cols = grid.width(), "parsed sheet grid");
        Ok(grid)
    }

    /// Number of data rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns declared by the header.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, label: &str) -> bool {
        self.label_index.contains_key(&normalize_label(label))
    }

    /// Resolves a column selector to an index inside the header.
    pub fn column_index<'a>(&self, column: impl Into<Column<'a>>) -> Result<usize, GridError> {
        match column.into() {
            Column::Label(label) => self
                .label_index
                .get(&normalize_label(label))
                .copied()
                .ok_or_else(|| GridError::LabelNotFound {
                    label: label.to_string(),
                }),
            Column::Index(index) if index < self.width() => Ok(index),
            Column::Index(index) => Err(GridError::ColumnNotFound {
                column: index,
                width: self.width(),
            }),
        }
    }

    /// Returns the raw cell, `None` if the cell is absent.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error if the row or the resolved column is out
    /// of range, or if a label matches no header.
    pub fn get<'a>(
        &self,
        row: usize,
        column: impl Into<Column<'a>>,
    ) -> Result<Option<&CellValue>, GridError> {
        let index = self.column_index(column)?;
        let cells = self.rows.get(row).ok_or(GridError::RowNotFound {
            row,
            size: self.size(),
        })?;
        Ok(cells.get(index).and_then(Option::as_ref))
    }

    /// Cell as text, `None` if absent.
    pub fn get_text<'a>(
        &self,
        row: usize,
        column: impl Into<Column<'a>>,
    ) -> Result<Option<Cow<'_, str>>, GridError> {
        Ok(self.get(row, column)?.map(CellValue::to_text))
    }

    /// Cell as text, failing if absent.
    pub fn require_text<'a>(
        &self,
        row: usize,
        column: impl Into<Column<'a>>,
    ) -> Result<Cow<'_, str>, GridError> {
        let column = column.into();
        self.get_text(row, column)?
            .ok_or_else(|| absent(row, column))
    }

    /// Numeric coercion.
    ///
    /// Numbers are returned as-is. Text is stripped of every non-digit
    /// character and the remaining digits are read as a whole number, so
    /// `"1,234 XP"` yields `1234.0`.
    ///
    /// # Errors
    ///
    /// [`GridError::AbsentCell`] for absent cells and [`GridError::NotNumeric`]
    /// for text without digits.
    pub fn get_number<'a>(
        &self,
        row: usize,
        column: impl Into<Column<'a>>,
    ) -> Result<f64, GridError> {
        let column = column.into();
        match self.get(row, column)? {
            None => Err(absent(row, column)),
            Some(CellValue::Number(n)) => Ok(*n),
            Some(CellValue::Text(text)) => {
                coerce_digits(text).ok_or_else(|| GridError::NotNumeric {
                    row,
                    column: column.to_string(),
                    value: text.clone(),
                })
            }
        }
    }

    /// Percent coercion: `"50%"` yields `0.5`.
    ///
    /// A trailing `%` is optional; the value is always divided by 100, so a
    /// numeric cell `5` also yields `0.05`.
    pub fn get_percent<'a>(
        &self,
        row: usize,
        column: impl Into<Column<'a>>,
    ) -> Result<f64, GridError> {
        let column = column.into();
        match self.get(row, column)? {
            None => Err(absent(row, column)),
            Some(CellValue::Number(n)) => Ok(n / 100.0),
            Some(CellValue::Text(text)) => parse_percent(text)
                .map(|n| n / 100.0)
                .ok_or_else(|| GridError::NotPercent {
                    row,
                    column: column.to_string(),
                    value: text.clone(),
                }),
        }
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

fn absent(row: usize, column: Column<'_>) -> GridError {
    GridError::AbsentCell {
        row,
        column: column.to_string(),
    }
}

/// Reads the ASCII digits of `text` as one number, `None` if there are none.
pub(crate) fn coerce_digits(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

fn parse_percent(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use titans_core::{ErrorSeverity, ModelError};

    fn sample() -> Grid {
        let payload = json!({
            "table": {
                "cols": [{ "label": " Name " }, { "label": "XP" }, { "label": "Crit" }, { "label": "" }],
                "rows": [
                    { "c": [{ "v": "Fire Blade" }, { "v": "1,234 XP" }, { "v": "50%" }, null] },
                    { "c": [{ "v": "Ice Wand" }, { "v": 15 }, { "v": 5 }] },
                    { "c": [{ "v": "Rock" }, { "v": null }, { "v": "n/a" }, { "v": "x" }] }
                ]
            }
        });
        Grid::from_json(&payload.to_string()).unwrap()
    }

    #[test]
    fn size_counts_rows() {
        assert_eq!(sample().size(), 3);
        assert_eq!(sample().width(), 4);
    }

    #[test]
    fn labels_match_case_insensitively() {
        let grid = sample();
        assert_eq!(grid.get(0, "Name").unwrap(), grid.get(0, "name").unwrap());
        assert_eq!(grid.get(0, "  NAME").unwrap(), grid.get(0, 0usize).unwrap());
        assert_eq!(
            grid.get(0, "name").unwrap(),
            Some(&CellValue::Text("Fire Blade".into()))
        );
    }

    #[test]
    fn number_strips_non_digits() {
        let grid = sample();
        assert_eq!(grid.get_number(0, "XP").unwrap(), 1234.0);
        assert_eq!(grid.get_number(1, "xp").unwrap(), 15.0);
    }

    #[test]
    fn number_beyond_integer_range_still_parses() {
        let payload = json!({
            "table": {
                "cols": [{ "label": "XP" }],
                "rows": [{ "c": [{ "v": "123,456,789,012,345,678,901,234 XP" }] }]
            }
        });
        let grid = Grid::from_json(&payload.to_string()).unwrap();
        let xp = grid.get_number(0, "XP").unwrap();
        assert!((xp - 1.234_567_890_123_456_8e23).abs() / xp < 1e-12);
    }

    #[test]
    fn percent_divides_by_hundred() {
        let grid = sample();
        assert_eq!(grid.get_percent(0, "Crit").unwrap(), 0.5);
        assert_eq!(grid.get_percent(1, "Crit").unwrap(), 0.05);
    }

    #[test]
    fn absent_cells_are_format_errors() {
        let grid = sample();
        assert_eq!(grid.get(2, "XP").unwrap(), None);
        assert_eq!(grid.get(1, 3usize).unwrap(), None);

        let err = grid.get_number(2, "XP").unwrap_err();
        assert!(matches!(err, GridError::AbsentCell { row: 2, .. }));
        assert_eq!(err.severity(), ErrorSeverity::Format);

        let err = grid.get_percent(0, 3usize).unwrap_err();
        assert!(matches!(err, GridError::AbsentCell { .. }));
    }

    #[test]
    fn uncoercible_text_is_format_error() {
        let grid = sample();
        let err = grid.get_percent(2, "Crit").unwrap_err();
        assert_eq!(err.error_code(), "GRID_NOT_PERCENT");
        let err = grid.get_number(2, "Crit").unwrap_err();
        assert_eq!(err.error_code(), "GRID_NOT_NUMERIC");
    }

    #[test]
    fn out_of_range_is_not_found() {
        let grid = sample();
        assert!(matches!(
            grid.get(3, "Name"),
            Err(GridError::RowNotFound { row: 3, size: 3 })
        ));
        assert!(matches!(
            grid.get(0, 4usize),
            Err(GridError::ColumnNotFound { column: 4, width: 4 })
        ));
        let err = grid.get(0, "Tier").unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::NotFound);
    }

    #[test]
    fn missing_cols_or_rows_fail_validation() {
        let no_cols = json!({ "table": { "rows": [{ "c": [] }] } });
        assert!(matches!(
            Grid::from_json(&no_cols.to_string()),
            Err(GridError::Validation(_))
        ));

        let no_rows = json!({ "table": { "cols": [{ "label": "Name" }], "rows": [] } });
        assert!(matches!(
            Grid::from_json(&no_rows.to_string()),
            Err(GridError::Validation(_))
        ));

        let empty_cols = json!({ "table": { "cols": [], "rows": [{ "c": [] }] } });
        assert!(matches!(
            Grid::from_json(&empty_cols.to_string()),
            Err(GridError::Validation(_))
        ));

        assert!(matches!(Grid::from_json("{}"), Err(GridError::Validation(_))));
        assert!(matches!(Grid::from_json("not json"), Err(GridError::Json(_))));
    }

    #[test]
    fn blank_labels_are_index_only() {
        let grid = sample();
        assert!(!grid.has_column(""));
        assert_eq!(
            grid.get(2, 3usize).unwrap(),
            Some(&CellValue::Text("x".into()))
        );
    }
}
