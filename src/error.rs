//! Error types for board construction, piece parsing and move execution.
//!
//! A dead end (no legal moves) is not an error: the enumerator returns an
//! empty list and the search driver decides what to do with it.

use std::fmt;

use crate::pieces::PieceId;

/// Malformed board input, rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board has no rows, or its first row has no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Empty => write!(f, "board has zero rows or zero columns"),
            BoardError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "board row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Malformed piece definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// The piece at `index` (input order) covers no cells.
    EmptyShape { index: usize },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::EmptyShape { index } => write!(f, "piece {index} covers no cells"),
        }
    }
}

impl std::error::Error for PieceError {}

/// A move the current state cannot accept.
///
/// None of these occur when the driver only executes moves returned by the
/// latest enumeration; they exist so that misuse is reported instead of
/// corrupting the board or the counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The piece is not (or no longer) in the inventory.
    UnknownPiece { piece_id: PieceId },
    /// The piece has fewer orientations than the requested index.
    OrientationOutOfRange {
        piece_id: PieceId,
        orientation: usize,
        available: usize,
    },
    /// A covered mask cell lands outside the board.
    OutOfBounds { row: usize, column: usize },
    /// A covered mask cell lands on a cell that is not empty.
    CellOccupied { row: usize, column: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownPiece { piece_id } => {
                write!(f, "piece {piece_id} is not in the inventory")
            }
            MoveError::OrientationOutOfRange {
                piece_id,
                orientation,
                available,
            } => write!(
                f,
                "piece {piece_id} has {available} orientations, requested {orientation}"
            ),
            MoveError::OutOfBounds { row, column } => {
                write!(f, "placement covers ({row}, {column}) outside the board")
            }
            MoveError::CellOccupied { row, column } => {
                write!(f, "placement covers occupied cell ({row}, {column})")
            }
        }
    }
}

impl std::error::Error for MoveError {}
