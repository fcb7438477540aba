//! Tangram Puzzle State Library
//!
//! Models one state of a polyomino tiling puzzle for a generic tree-search
//! driver: legal moves for the next piece, move execution, and the goal, cost
//! and heuristic signals the driver ranks states by.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod state;

pub use error::{BoardError, MoveError, PieceError};
pub use state::{Move, TangramPuzzle};

use pieces::Shape;

/// What a search driver needs from a problem state.
///
/// Drivers branch by cloning: each explored child is a clone of its parent
/// with one move executed.
pub trait SearchState: Clone {
    type Move;

    /// Legal moves from this state. Empty means a dead end.
    fn possible_moves(&self) -> Vec<Self::Move>;
    fn execute(&mut self, mv: &Self::Move) -> Result<(), MoveError>;
    fn is_goal(&self) -> bool;
    fn cost(&self, mv: &Self::Move) -> Result<i64, MoveError>;
    fn heuristic(&self) -> i64;
    /// Duplicate test used for pruning; may be weaker than structural equality.
    fn equals(&self, other: &Self) -> bool;
}

impl<S: Shape> SearchState for TangramPuzzle<S> {
    type Move = Move;

    fn possible_moves(&self) -> Vec<Move> {
        TangramPuzzle::possible_moves(self)
    }

    fn execute(&mut self, mv: &Move) -> Result<(), MoveError> {
        TangramPuzzle::execute(self, mv)
    }

    fn is_goal(&self) -> bool {
        TangramPuzzle::is_goal(self)
    }

    fn cost(&self, mv: &Move) -> Result<i64, MoveError> {
        TangramPuzzle::cost(self, mv)
    }

    fn heuristic(&self) -> i64 {
        TangramPuzzle::heuristic(self)
    }

    fn equals(&self, other: &Self) -> bool {
        TangramPuzzle::equals(self, other)
    }
}
