//! Fixed-size grid storage.
//!
//! A sheet owns a `rows × cols` grid of optional cells, stored flat and
//! indexed `row * cols + col`. Out-of-bounds reads resolve to neutral
//! defaults (0 / empty string) and out-of-bounds writes are silent no-ops;
//! neither is an error. Storing a cell at an occupied slot drops the
//! previous occupant.

use std::collections::HashSet;

use super::{Cell, CellRef, EngineError, eval};

#[derive(Debug)]
pub struct Sheet {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Cell>>,
}

impl Sheet {
    pub fn new(rows: usize, cols: usize) -> Sheet {
        Sheet {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Store a cell, replacing any existing occupant. Out-of-bounds
    /// positions are ignored; the return value reports whether the cell
    /// was actually stored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = Some(cell);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        let i = self.index(row, col)?;
        self.cells[i].as_ref()
    }

    /// Numeric rendering of a slot: 0 when empty, out of bounds, or the
    /// cell's formula fails to compute.
    pub fn numeric_at(&self, row: usize, col: usize) -> i64 {
        self.formula_value(row, col).map_or(0, |r| r.unwrap_or(0))
    }

    /// Text rendering of a slot: empty string when empty or out of bounds,
    /// an error marker when the cell's formula fails to compute.
    pub fn text_at(&self, row: usize, col: usize) -> String {
        match self.get(row, col) {
            None => String::new(),
            Some(Cell::Formula(_)) => match self.formula_value(row, col) {
                Some(Ok(n)) => n.to_string(),
                Some(Err(e)) => e.marker().to_string(),
                None => String::new(),
            },
            Some(cell) => cell.to_display(self),
        }
    }

    /// Numeric rendering addressed by A1 notation. Malformed addresses are
    /// treated as out of range.
    pub fn numeric_at_addr(&self, addr: &str) -> i64 {
        match CellRef::from_str(addr) {
            Some(at) => self.numeric_at(at.row, at.col),
            None => 0,
        }
    }

    /// Text rendering addressed by A1 notation. Malformed addresses are
    /// treated as out of range.
    pub fn text_at_addr(&self, addr: &str) -> String {
        match CellRef::from_str(addr) {
            Some(at) => self.text_at(at.row, at.col),
            None => String::new(),
        }
    }

    /// Evaluate the cell at a slot, guarding against the cell referencing
    /// itself. Non-formula cells yield their scalar value; empty and
    /// out-of-bounds slots yield None.
    fn formula_value(&self, row: usize, col: usize) -> Option<Result<i64, EngineError>> {
        let cell = self.get(row, col)?;
        match cell {
            Cell::Formula(expr) => {
                let mut visited = HashSet::new();
                visited.insert(CellRef::new(row, col));
                Some(eval::evaluate(expr, self, &mut visited))
            }
            other => Some(Ok(other.scalar_numeric())),
        }
    }

    /// Iterate over occupied slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref()
                .map(|cell| (CellRef::new(i / self.cols, i % self.cols), cell))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_out_of_bounds_defaults() {
        let sheet = Sheet::new(3, 3);
        assert_eq!(sheet.numeric_at(0, 0), 0);
        assert_eq!(sheet.text_at(0, 0), "");
        assert_eq!(sheet.numeric_at(99, 99), 0);
        assert_eq!(sheet.text_at(99, 99), "");
    }

    #[test]
    fn test_out_of_bounds_write_is_a_no_op() {
        let mut sheet = Sheet::new(2, 2);
        assert!(sheet.set(0, 0, Cell::number(1)));
        assert!(!sheet.set(5, 0, Cell::number(9)));
        assert!(!sheet.set(0, 5, Cell::number(9)));

        // All in-bounds slots are unchanged.
        for row in 0..2 {
            for col in 0..2 {
                let expected = if row == 0 && col == 0 { 1 } else { 0 };
                assert_eq!(sheet.numeric_at(row, col), expected);
            }
        }
        assert_eq!(sheet.iter().count(), 1);
    }

    #[test]
    fn test_replacement_supersedes_old_cell() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set(0, 0, Cell::text("old"));
        sheet.set(0, 0, Cell::number(7));
        assert_eq!(sheet.text_at(0, 0), "7");
        assert_eq!(sheet.numeric_at(0, 0), 7);
    }

    #[test]
    fn test_formula_renders_consistently_as_text_and_number() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set(0, 0, Cell::number(3));
        sheet.set(0, 1, Cell::formula("A1+4"));
        assert_eq!(sheet.numeric_at(0, 1), 7);
        assert_eq!(sheet.text_at(0, 1), "7");
    }

    #[test]
    fn test_addressed_lookup() {
        let mut sheet = Sheet::new(12, 2);
        sheet.set(11, 1, Cell::number(42)); // B12
        assert_eq!(sheet.numeric_at_addr("B12"), 42);
        assert_eq!(sheet.text_at_addr("B12"), "42");
    }

    #[test]
    fn test_malformed_address_resolves_to_defaults() {
        let sheet = Sheet::new(2, 2);
        assert_eq!(sheet.numeric_at_addr("not an address"), 0);
        assert_eq!(sheet.text_at_addr(""), "");
        assert_eq!(sheet.numeric_at_addr("13"), 0);
        assert_eq!(sheet.text_at_addr("AB"), "");
    }

    #[test]
    fn test_self_referential_formula_renders_cycle_marker() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set(0, 0, Cell::formula("A1+1"));
        assert_eq!(sheet.text_at(0, 0), "#CYCLE!");
        assert_eq!(sheet.numeric_at(0, 0), 0);
    }

    #[test]
    fn test_transitive_cycle_renders_cycle_marker() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set(0, 0, Cell::formula("B1*2")); // A1
        sheet.set(0, 1, Cell::formula("A1*2")); // B1
        assert_eq!(sheet.text_at(0, 0), "#CYCLE!");
        assert_eq!(sheet.text_at(0, 1), "#CYCLE!");
    }

    #[test]
    fn test_error_markers_by_kind() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set(0, 0, Cell::formula("1/0"));
        sheet.set(0, 1, Cell::formula("(1+2"));
        assert_eq!(sheet.text_at(0, 0), "#DIV/0!");
        assert_eq!(sheet.text_at(0, 1), "#ERROR!");
        assert_eq!(sheet.numeric_at(0, 0), 0);
        assert_eq!(sheet.numeric_at(0, 1), 0);
    }

    #[test]
    fn test_iter_row_major_order() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set(1, 1, Cell::number(4));
        sheet.set(0, 1, Cell::number(2));
        sheet.set(0, 0, Cell::number(1));
        let refs: Vec<String> = sheet.iter().map(|(r, _)| r.to_string()).collect();
        assert_eq!(refs, vec!["A1", "B1", "B2"]);
    }
}
