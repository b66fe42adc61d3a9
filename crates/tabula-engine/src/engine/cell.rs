//! Cell values for the spreadsheet grid.
//!
//! A cell is one of four closed variants: text, integer number, calendar
//! date, or formula. Cells are immutable once constructed; changing a grid
//! slot means replacing the whole cell. Formula cells store only their raw
//! expression text and are reevaluated on every query.

use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;

use super::{EngineError, Sheet, eval};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single cell value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(i64),
    Date(NaiveDate),
    Formula(String),
}

impl Cell {
    pub fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    pub fn number(n: i64) -> Cell {
        Cell::Number(n)
    }

    pub fn formula(expr: &str) -> Cell {
        Cell::Formula(expr.to_string())
    }

    /// Build a number cell from its decimal text payload.
    pub fn number_from_str(payload: &str) -> Result<Cell, EngineError> {
        let n = payload
            .trim()
            .parse::<i64>()
            .map_err(|_| EngineError::NumberParse(payload.to_string()))?;
        Ok(Cell::Number(n))
    }

    /// Build a date cell from a `YYYY-MM-DD` text payload.
    pub fn date_from_str(payload: &str) -> Result<Cell, EngineError> {
        let date = NaiveDate::parse_from_str(payload.trim(), DATE_FORMAT)
            .map_err(|_| EngineError::DateParse(payload.to_string()))?;
        Ok(Cell::Date(date))
    }

    /// Render the cell as text. Formula cells evaluate against the given
    /// sheet and render their numeric result, or an error marker.
    pub fn to_display(&self, sheet: &Sheet) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Date(d) => d.format(DATE_FORMAT).to_string(),
            Cell::Formula(expr) => match eval::evaluate(expr, sheet, &mut HashSet::new()) {
                Ok(n) => n.to_string(),
                Err(e) => e.marker().to_string(),
            },
        }
    }

    /// Render the cell as a number. Text is always 0; dates render as
    /// seconds since the Unix epoch at midnight UTC; formula errors are 0.
    pub fn to_numeric(&self, sheet: &Sheet) -> i64 {
        match self {
            Cell::Formula(expr) => {
                eval::evaluate(expr, sheet, &mut HashSet::new()).unwrap_or(0)
            }
            other => other.scalar_numeric(),
        }
    }

    /// Numeric value of a non-formula cell. Formula cells yield 0 here;
    /// callers that can resolve references go through [`Sheet`].
    pub(crate) fn scalar_numeric(&self) -> i64 {
        match self {
            Cell::Text(_) => 0,
            Cell::Number(n) => *n,
            Cell::Date(d) => d.and_time(NaiveTime::MIN).and_utc().timestamp(),
            Cell::Formula(_) => 0,
        }
    }

    /// The editable source form of the cell, as used by the `.tbl` format.
    pub fn to_input_string(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Date(d) => d.format(DATE_FORMAT).to_string(),
            Cell::Formula(expr) => format!("={}", expr),
        }
    }
}
