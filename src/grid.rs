//! Board representation, parsing and rendering.
//!
//! The board is a flat row-major array of cells. Each cell is empty, blocked
//! (pre-filled in the input) or holds the id of the piece covering it. A
//! per-row empty count is kept alongside so the fit checker's row test does
//! not rescan the row.

use std::fmt;

use crate::error::BoardError;
use crate::pieces::{PieceId, COVERED};

/// Glyph for a blocked cell when rendering.
const BLOCKED_GLYPH: char = '#';

/// State of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blocked,
    Piece(PieceId),
}

/// A fixed-size rectangular board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    /// Number of empty cells in each row.
    row_empty: Vec<usize>,
}

impl Board {
    /// Builds a board from rows of cells.
    ///
    /// Fails if there are no rows, the first row is empty, or any row's
    /// length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let columns = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(BoardError::Empty),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(BoardError::RaggedRow {
                row,
                expected: columns,
                found,
            });
        }

        let row_empty = rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == Cell::Empty).count())
            .collect();

        Ok(Self {
            rows: rows.len(),
            columns,
            cells: rows.into_iter().flatten().collect(),
            row_empty,
        })
    }

    /// Parses a board from text: `*` is an empty cell, any other character
    /// a blocked one. Blank lines before the first row and after the last
    /// are ignored.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let start = lines.iter().position(|l| !l.trim().is_empty());
        let end = lines.iter().rposition(|l| !l.trim().is_empty());

        let rows = match (start, end) {
            (Some(start), Some(end)) => lines[start..=end]
                .iter()
                .map(|line| {
                    line.chars()
                        .map(|ch| {
                            if ch == COVERED {
                                Cell::Empty
                            } else {
                                Cell::Blocked
                            }
                        })
                        .collect()
                })
                .collect(),
            _ => Vec::new(),
        };

        Self::from_rows(rows)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `(row, column)`, or `None` outside the board.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Returns whether `(row, column)` is on the board and empty.
    #[inline]
    pub fn is_empty_at(&self, row: usize, column: usize) -> bool {
        self.get(row, column) == Some(Cell::Empty)
    }

    /// Number of empty cells in `row` (0 outside the board).
    #[inline]
    pub fn row_empty_count(&self, row: usize) -> usize {
        self.row_empty.get(row).copied().unwrap_or(0)
    }

    /// Counts empty cells by scanning the whole board.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Marks an empty cell as covered by `piece_id`.
    ///
    /// Callers check the cell is empty first; the row count assumes it.
    pub(crate) fn place(&mut self, row: usize, column: usize, piece_id: PieceId) {
        debug_assert!(self.is_empty_at(row, column));
        self.cells[row * self.columns + column] = Cell::Piece(piece_id);
        self.row_empty[row] -= 1;
    }
}

/// Display character for a piece id: `0-9`, then `A-Z`, then `+`.
pub fn piece_glyph(piece_id: PieceId) -> char {
    match piece_id {
        0..=9 => char::from(b'0' + piece_id as u8),
        10..=35 => char::from(b'A' + (piece_id - 10) as u8),
        _ => '+',
    }
}

impl fmt::Display for Board {
    /// Renders one line per row: `*` empty, `#` blocked, glyphs for pieces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            for cell in row {
                let glyph = match cell {
                    Cell::Empty => COVERED,
                    Cell::Blocked => BLOCKED_GLYPH,
                    Cell::Piece(id) => piece_glyph(*id),
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Board of the built-in sample puzzle: an empty 4x4 square.
pub const SAMPLE_BOARD: &str = "****\n****\n****\n****\n";
