use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ClearpassError;
use crate::types::{Cell, RawTable};
use crate::ClearpassResult;

lazy_static! {
    /// A header counts as period-bearing when it embeds a calendar year
    /// or a fiscal-year abbreviation (FY22).
    static ref PERIOD_HEADER: Regex = Regex::new(r"(20\d\d)|(\bfy\d{2}\b)").unwrap();

    /// The year used for ordering is the first calendar year embedded in
    /// the header text.
    static ref EMBEDDED_YEAR: Regex = Regex::new(r"20\d\d").unwrap();
}

// ---------------------------------------------------------------------------
// Projection types
// ---------------------------------------------------------------------------

/// One account row after the table is reduced to two columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    pub account: String,
    pub value: Cell,
}

/// The (Account, Value) view of a raw table, plus any degraded-mode notes
/// collected while resolving the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub rows: Vec<ProjectedRow>,
    pub warnings: Vec<String>,
}

/// A period column detected in a wide table's headers.
#[derive(Debug, Clone, PartialEq)]
pub struct YearColumn {
    pub index: usize,
    pub header: String,
    pub year: i32,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Detect every period-bearing column of a table, in header order.
/// Headers carrying only a fiscal abbreviation (no 4-digit year) sort
/// below every real year.
pub fn year_columns(table: &RawTable) -> Vec<YearColumn> {
    table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| PERIOD_HEADER.is_match(&header.to_lowercase()))
        .map(|(index, header)| YearColumn {
            index,
            header: header.clone(),
            year: embedded_year(header),
        })
        .collect()
}

fn embedded_year(header: &str) -> i32 {
    EMBEDDED_YEAR
        .find(header)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(-1)
}

/// Reduce a raw table to (Account, Value) pairs.
///
/// Tables with three or more columns are presumed wide: the column with
/// the greatest embedded year wins (rightmost on ties), and the account
/// labels come from column 0. Wide tables without year-bearing headers
/// degrade to the first two columns, with a warning rather than an
/// error. Narrow tables use columns 0 and 1 directly. The only loud
/// failure is a table with no columns at all.
pub fn resolve_layout(table: &RawTable) -> ClearpassResult<Projection> {
    if table.column_count() == 0 {
        return Err(ClearpassError::MalformedTable(
            "table has no columns".to_string(),
        ));
    }

    let mut warnings = Vec::new();
    let value_column = if table.column_count() >= 3 {
        let candidates = year_columns(table);
        match candidates.iter().max_by_key(|c| (c.year, c.index)) {
            Some(latest) => latest.index,
            None => {
                warnings.push(
                    "wide table has no year-bearing headers; using the first two columns"
                        .to_string(),
                );
                1
            }
        }
    } else {
        1
    };

    let rows = project(table, value_column);
    Ok(Projection { rows, warnings })
}

/// Project account labels (column 0) against one value column. Short rows
/// yield empty cells instead of failing, so ragged exports degrade to
/// missing values.
pub fn project(table: &RawTable, value_column: usize) -> Vec<ProjectedRow> {
    table
        .rows
        .iter()
        .filter(|row| !row.iter().all(|cell| matches!(cell, Cell::Empty)))
        .map(|row| ProjectedRow {
            account: row.first().map(Cell::as_label).unwrap_or_default(),
            value: row.get(value_column).cloned().unwrap_or(Cell::Empty),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
