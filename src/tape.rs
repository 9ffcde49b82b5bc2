//! A bounded window over a conceptually two-way infinite tape.

use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The machine's tape.
///
/// Only positions `0..len` are stored. Reads anywhere else return `Blank` and writes
/// there are discarded, which is how the machine sees the end of the live digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    cells: Vec<Symbol>,
}

impl Tape {
    /// Creates a tape of `len` blank cells.
    pub fn blank(len: usize) -> Self {
        Self {
            cells: vec![Symbol::Blank; len],
        }
    }

    pub fn from_symbols(cells: Vec<Symbol>) -> Self {
        Self { cells }
    }

    /// Returns the symbol at `position`, `Blank` outside the window.
    pub fn read(&self, position: isize) -> Symbol {
        self.index(position)
            .map(|i| self.cells[i])
            .unwrap_or(Symbol::Blank)
    }

    /// Overwrites the symbol at `position`. No-op outside the window.
    pub fn write(&mut self, position: isize, symbol: Symbol) {
        if let Some(i) = self.index(position) {
            self.cells[i] = symbol;
        }
    }

    fn index(&self, position: isize) -> Option<usize> {
        usize::try_from(position)
            .ok()
            .filter(|&i| i < self.cells.len())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Number of cells holding a digit.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|s| **s != Symbol::Blank).count()
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.cells {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tape() {
        let tape = Tape::blank(4);
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.live_count(), 0);
        assert_eq!(tape.to_string(), "____");
    }

    #[test]
    fn test_read_write_inside_window() {
        let mut tape = Tape::blank(3);
        tape.write(1, Symbol::One);
        tape.write(2, Symbol::Zero);

        assert_eq!(tape.read(0), Symbol::Blank);
        assert_eq!(tape.read(1), Symbol::One);
        assert_eq!(tape.read(2), Symbol::Zero);
        assert_eq!(tape.to_string(), "_10");

        // Erase
        tape.write(1, Symbol::Blank);
        assert_eq!(tape.read(1), Symbol::Blank);
        assert_eq!(tape.live_count(), 1);
    }

    #[test]
    fn test_out_of_window_access_is_blank() {
        let mut tape = Tape::from_symbols(vec![Symbol::One, Symbol::One]);

        assert_eq!(tape.read(-1), Symbol::Blank);
        assert_eq!(tape.read(2), Symbol::Blank);
        assert_eq!(tape.read(isize::MIN), Symbol::Blank);
        assert_eq!(tape.read(isize::MAX), Symbol::Blank);

        tape.write(-1, Symbol::Zero);
        tape.write(2, Symbol::Zero);
        tape.write(isize::MAX, Symbol::Zero);
        assert_eq!(tape.cells(), &[Symbol::One, Symbol::One]);
    }

    #[test]
    fn test_empty_tape() {
        let mut tape = Tape::blank(0);
        assert!(tape.is_empty());
        tape.write(0, Symbol::One);
        assert_eq!(tape.read(0), Symbol::Blank);
    }
}
