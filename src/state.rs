//! Puzzle state for a tree-search driver.
//!
//! A [`TangramPuzzle`] is one node of the search: a board, the pieces not yet
//! placed and two progress counters. The driver asks it for moves, executes
//! one on a clone per branch, and ranks states by cost and heuristic.
//!
//! Only the frontier piece, the largest remaining one, is ever offered for
//! placement. If it fits nowhere the branch is dead.

use std::fmt;
use std::sync::Arc;

use crate::error::{BoardError, MoveError};
use crate::grid::{Board, Cell};
use crate::pieces::{Mask, PieceId, Shape};

/// Placement of one piece: the mask origin of `orientation` goes on
/// `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub orientation: usize,
    pub piece_id: PieceId,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.row, self.column, self.orientation, self.piece_id
        )
    }
}

/// A piece not yet placed, with its id.
#[derive(Debug)]
pub struct InventoryEntry<S> {
    shape: Arc<S>,
    id: PieceId,
}

impl<S> InventoryEntry<S> {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }
}

impl<S> Clone for InventoryEntry<S> {
    fn clone(&self) -> Self {
        Self {
            shape: Arc::clone(&self.shape),
            id: self.id,
        }
    }
}

/// One state of a tiling search.
#[derive(Debug)]
pub struct TangramPuzzle<S> {
    board: Board,
    /// Unplaced pieces, largest first.
    inventory: Vec<InventoryEntry<S>>,
    total_pieces: usize,
    choices_taken: usize,
    empty_cells: usize,
}

impl<S> Clone for TangramPuzzle<S> {
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            inventory: self.inventory.clone(),
            total_pieces: self.total_pieces,
            choices_taken: self.choices_taken,
            empty_cells: self.empty_cells,
        }
    }
}

impl<S: Shape> TangramPuzzle<S> {
    /// Creates the initial state from board rows and pieces.
    ///
    /// Pieces get ids in input order, then are stable-sorted by covered
    /// cell count, largest first.
    pub fn new(
        rows: Vec<Vec<Cell>>,
        pieces: impl IntoIterator<Item = S>,
    ) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::from_rows(rows)?, pieces))
    }

    /// Creates the initial state from an already validated board.
    pub fn with_board(board: Board, pieces: impl IntoIterator<Item = S>) -> Self {
        let mut inventory: Vec<InventoryEntry<S>> = pieces
            .into_iter()
            .enumerate()
            .map(|(id, shape)| InventoryEntry {
                shape: Arc::new(shape),
                id,
            })
            .collect();
        // sort_by is stable: equal sizes keep input order
        inventory.sort_by(|a, b| {
            b.shape
                .covered_cell_count()
                .cmp(&a.shape.covered_cell_count())
        });

        let empty_cells = (0..board.rows()).map(|r| board.row_empty_count(r)).sum();
        log::debug!(
            "new {}x{} puzzle: {} empty cells, {} pieces",
            board.rows(),
            board.columns(),
            empty_cells,
            inventory.len()
        );

        Self {
            board,
            total_pieces: inventory.len(),
            inventory,
            choices_taken: 0,
            empty_cells,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unplaced pieces, frontier piece first.
    pub fn inventory(&self) -> &[InventoryEntry<S>] {
        &self.inventory
    }

    pub fn total_pieces(&self) -> usize {
        self.total_pieces
    }

    pub fn choices_taken(&self) -> usize {
        self.choices_taken
    }

    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }

    /// Weak equality: states match when the same number of cells remain
    /// empty, whatever the layout. Duplicate pruning in the driver relies on
    /// exactly this.
    pub fn equals(&self, other: &Self) -> bool {
        self.empty_cells == other.empty_cells
    }

    /// Returns whether `mask` can be placed with its origin on
    /// `(row, column)`.
    ///
    /// The origin cell must be empty, the mask's top row may not cover more
    /// cells than `row` has empty, the whole mask box must lie on the board,
    /// and every covered cell must land on an empty cell. Uncovered mask
    /// cells may sit over anything.
    pub fn piece_fits(&self, mask: &Mask, row: usize, column: usize) -> bool {
        if !self.board.is_empty_at(row, column) {
            return false;
        }
        if mask.row_covered_count(0) > self.board.row_empty_count(row) {
            return false;
        }
        if row + mask.height() > self.board.rows() || column + mask.width() > self.board.columns()
        {
            return false;
        }
        mask.covered_cells()
            .all(|(dr, dc)| self.board.is_empty_at(row + dr, column + dc))
    }

    /// All placements of the frontier piece, in row-major board order and
    /// then orientation order.
    ///
    /// Empty when no pieces remain or the frontier piece fits nowhere.
    pub fn possible_moves(&self) -> Vec<Move> {
        let Some(frontier) = self.inventory.first() else {
            return Vec::new();
        };
        let orientations = frontier.shape.orientations();

        let mut moves = Vec::new();
        for row in 0..self.board.rows() {
            for column in 0..self.board.columns() {
                if !self.board.is_empty_at(row, column) {
                    continue;
                }
                for (orientation, mask) in orientations.iter().enumerate() {
                    if self.piece_fits(mask, row, column) {
                        moves.push(Move {
                            row,
                            column,
                            orientation,
                            piece_id: frontier.id,
                        });
                    }
                }
            }
        }

        if moves.is_empty() {
            log::trace!("dead end: piece {} fits nowhere", frontier.id);
        }
        moves
    }

    /// Places a piece and removes it from the inventory.
    ///
    /// The move is validated in full before anything changes, so on error
    /// the state is untouched.
    pub fn execute(&mut self, mv: &Move) -> Result<(), MoveError> {
        let position = self.inventory_position(mv.piece_id)?;
        let shape = Arc::clone(&self.inventory[position].shape);
        let orientations = shape.orientations();
        let mask = orientations
            .get(mv.orientation)
            .ok_or(MoveError::OrientationOutOfRange {
                piece_id: mv.piece_id,
                orientation: mv.orientation,
                available: orientations.len(),
            })?;

        let mut cells = Vec::with_capacity(mask.covered_count());
        for (dr, dc) in mask.covered_cells() {
            let (Some(row), Some(column)) = (mv.row.checked_add(dr), mv.column.checked_add(dc))
            else {
                return Err(MoveError::OutOfBounds {
                    row: mv.row.saturating_add(dr),
                    column: mv.column.saturating_add(dc),
                });
            };
            match self.board.get(row, column) {
                None => return Err(MoveError::OutOfBounds { row, column }),
                Some(Cell::Empty) => cells.push((row, column)),
                Some(_) => return Err(MoveError::CellOccupied { row, column }),
            }
        }

        for (row, column) in cells {
            self.board.place(row, column, mv.piece_id);
            self.empty_cells -= 1;
        }
        self.inventory.remove(position);
        self.choices_taken += 1;

        log::trace!(
            "placed piece {} at ({}, {}) orientation {}; {} cells left",
            mv.piece_id,
            mv.row,
            mv.column,
            mv.orientation,
            self.empty_cells
        );
        Ok(())
    }

    /// True once no empty cell remains, even if pieces are left over.
    pub fn is_goal(&self) -> bool {
        self.empty_cells == 0
    }

    /// Step cost of a move: minus the size of the piece it places, so a
    /// minimizing search prefers large pieces.
    pub fn cost(&self, mv: &Move) -> Result<i64, MoveError> {
        let position = self.inventory_position(mv.piece_id)?;
        Ok(-(self.inventory[position].shape.covered_cell_count() as i64))
    }

    /// Placements still to make, assuming one per remaining piece.
    pub fn heuristic(&self) -> i64 {
        self.total_pieces as i64 - self.choices_taken as i64
    }

    /// Total cells covered by all pieces still in the inventory.
    pub fn piece_cell_total(&self) -> usize {
        self.inventory
            .iter()
            .map(|entry| entry.shape.covered_cell_count())
            .sum()
    }

    /// Cells the remaining pieces cover beyond (positive) or short of
    /// (negative) the empty cells left. Zero for a consistent puzzle.
    pub fn leftover_cells(&self) -> i64 {
        self.piece_cell_total() as i64 - self.empty_cells as i64
    }

    fn inventory_position(&self, piece_id: PieceId) -> Result<usize, MoveError> {
        self.inventory
            .iter()
            .position(|entry| entry.id == piece_id)
            .ok_or(MoveError::UnknownPiece { piece_id })
    }
}
