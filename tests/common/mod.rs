//! Shared helpers for integration tests: hand-built shapes and two minimal
//! search drivers that use the state only through `SearchState`.

#![allow(dead_code)]

use tangram::geometry::Symmetry;
use tangram::grid::Board;
use tangram::pieces::{Mask, Shape, Tangram};
use tangram::{SearchState, TangramPuzzle};

/// A shape whose orientations are listed by hand, in order.
#[derive(Debug, Clone)]
pub struct FixedShape {
    masks: Vec<Mask>,
    covered: usize,
}

impl FixedShape {
    pub fn new(orientations: &[&[&str]]) -> Self {
        let masks: Vec<Mask> = orientations.iter().map(|rows| Mask::from_rows(rows)).collect();
        let covered = masks.first().map(Mask::covered_count).unwrap_or(0);
        Self { masks, covered }
    }
}

impl Shape for FixedShape {
    fn orientations(&self) -> &[Mask] {
        &self.masks
    }

    fn covered_cell_count(&self) -> usize {
        self.covered
    }
}

/// Builds a puzzle from board text and piece rows, all orientations allowed.
pub fn puzzle(board: &str, pieces: &[&[&str]]) -> TangramPuzzle<Tangram> {
    let pieces = pieces
        .iter()
        .map(|rows| Tangram::from_rows(rows, Symmetry::RotationsAndReflections).unwrap());
    TangramPuzzle::with_board(Board::parse(board).unwrap(), pieces)
}

/// Depth-first search over moves in enumeration order.
pub fn depth_first<S: SearchState>(state: &S) -> Option<S> {
    if state.is_goal() {
        return Some(state.clone());
    }
    for mv in state.possible_moves() {
        let mut child = state.clone();
        child.execute(&mv).expect("enumerated move executes");
        if let Some(solution) = depth_first(&child) {
            return Some(solution);
        }
    }
    None
}

/// Best-first search on `cost + heuristic`, pruning states that `equals` an
/// already expanded one. Returns the goal and the number of expansions.
pub fn best_first<S: SearchState>(start: S) -> Option<(S, usize)> {
    let mut frontier: Vec<(i64, S)> = vec![(0, start)];
    let mut closed: Vec<S> = Vec::new();
    let mut expansions = 0;

    while !frontier.is_empty() {
        // lowest f wins, earliest inserted among ties
        let best = (0..frontier.len())
            .min_by_key(|&i| frontier[i].0 + frontier[i].1.heuristic())
            .expect("frontier is not empty");
        let (g, state) = frontier.remove(best);

        if state.is_goal() {
            return Some((state, expansions));
        }
        if closed.iter().any(|seen| seen.equals(&state)) {
            continue;
        }
        expansions += 1;

        for mv in state.possible_moves() {
            let step = state.cost(&mv).expect("enumerated move has a cost");
            let mut child = state.clone();
            child.execute(&mv).expect("enumerated move executes");
            frontier.push((g + step, child));
        }
        closed.push(state);
    }
    None
}
