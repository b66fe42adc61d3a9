//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! (e.g., "A1", "B2", "AA100") and zero-indexed column/row coordinates.

use regex::Regex;
use std::fmt;

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from A1 notation (e.g., "A1", "B2", "AA10").
    /// Returns None if the input is invalid.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_a1(name)
    }

    fn parse_a1(name: &str) -> Option<CellRef> {
        let re = Regex::new(r"^(?<letters>[A-Z]+)(?<numbers>[0-9]+)$").unwrap();
        let caps = re.captures(name)?;
        let letters = &caps["letters"];
        let numbers = &caps["numbers"];

        // Bijective base-26: A..Z = 0..25, then AA, AB, ...
        let mut col_acc = 0usize;
        for c in letters.bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        let col = col_acc.checked_sub(1)?;

        let row = numbers.parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(row, col))
    }

    /// Convert a column index to spreadsheet letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_parse_single_letter() {
        let r = CellRef::from_str("B12").unwrap();
        assert_eq!(r.col, 1);
        assert_eq!(r.row, 11);
    }

    #[test]
    fn test_parse_double_letter() {
        let r = CellRef::from_str("AA1").unwrap();
        assert_eq!(r.col, 26);
        assert_eq!(r.row, 0);
    }

    #[test]
    fn test_parse_rejects_lowercase_and_garbage() {
        assert!(CellRef::from_str("a1").is_none());
        assert!(CellRef::from_str("A").is_none());
        assert!(CellRef::from_str("12").is_none());
        assert!(CellRef::from_str("A0").is_none());
        assert!(CellRef::from_str("").is_none());
    }

    #[test]
    fn test_column_letters_round_trip() {
        // Covers single- and double-letter columns (A..ZZ).
        for col in 0..=701 {
            let letters = CellRef::col_to_letters(col);
            let name = format!("{}1", letters);
            let parsed = CellRef::from_str(&name).unwrap();
            assert_eq!(parsed.col, col, "round trip failed for {}", name);
        }
    }

    #[test]
    fn test_display_matches_input() {
        for name in ["A1", "Z9", "AA10", "ZZ100", "AAB3"] {
            let r = CellRef::from_str(name).unwrap();
            assert_eq!(r.to_string(), name);
        }
    }

    #[test]
    fn test_parse_a1_overflow_returns_none() {
        let huge = format!("{}1", "Z".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }
}
