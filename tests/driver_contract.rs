//! The state driven end to end through the `SearchState` trait, the way an
//! external search driver uses it.

mod common;

use common::{best_first, depth_first, puzzle, FixedShape};
use tangram::geometry::Symmetry;
use tangram::grid::{Board, SAMPLE_BOARD};
use tangram::pieces::sample_pieces;
use tangram::TangramPuzzle;

#[test]
fn test_depth_first_solves_sample() {
    let start = TangramPuzzle::with_board(
        Board::parse(SAMPLE_BOARD).unwrap(),
        sample_pieces(Symmetry::RotationsAndReflections),
    );
    let solved = depth_first(&start).expect("sample puzzle is solvable");

    assert!(solved.is_goal());
    assert_eq!(solved.choices_taken(), 4);
    assert_eq!(solved.heuristic(), 0);
    insta::assert_snapshot!(solved.board().to_string(), @r"
    2211
    2211
    2333
    0003
    ");
}

#[test]
fn test_best_first_solves_sample() {
    let start = TangramPuzzle::with_board(
        Board::parse(SAMPLE_BOARD).unwrap(),
        sample_pieces(Symmetry::RotationsAndReflections),
    );
    let (solved, expansions) = best_first(start).expect("sample puzzle is solvable");

    assert!(solved.is_goal());
    assert!(solved.inventory().is_empty());
    // one expansion per placed piece: the deepest node always ranks first
    assert_eq!(expansions, 4);
}

#[test]
fn test_dead_end_is_not_an_error() {
    // the L covers three cells but the only empty cells are in one row
    let start = puzzle("***\n###", &[&["**", "*"]]);
    assert!(start.possible_moves().is_empty());
    assert!(depth_first(&start).is_none());
    assert!(best_first(start).is_none());
}

#[test]
fn test_depth_first_tiles_around_blocked_cell() {
    let start = puzzle("***\n*#*", &[&["**"], &["**"], &["*"]]);
    assert_eq!(start.leftover_cells(), 0);

    let solved = depth_first(&start).expect("board is tileable");
    assert_eq!(solved.board().to_string(), "001\n2#1\n");
    assert_eq!(solved.board().empty_count(), 0);
}

#[test]
fn test_fixed_orientation_order_drives_move_order() {
    let vertical_first = FixedShape::new(&[&["*", "*"], &["**"]]);
    let start = TangramPuzzle::with_board(Board::parse("**\n**").unwrap(), vec![vertical_first]);
    let moves = start.possible_moves();

    let summary: Vec<_> = moves
        .iter()
        .map(|m| (m.row, m.column, m.orientation))
        .collect();
    assert_eq!(summary, vec![(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 0, 1)]);
}

#[test]
fn test_weak_equality_prunes_sibling_placements() {
    let start = puzzle("***", &[&["*"]]);
    let moves = start.possible_moves();
    assert_eq!(moves.len(), 3);

    let children: Vec<_> = moves
        .iter()
        .map(|mv| {
            let mut child = start.clone();
            child.execute(mv).unwrap();
            child
        })
        .collect();

    // different layouts, same number of empty cells
    assert_ne!(children[0].board(), children[2].board());
    assert!(children[0].equals(&children[2]));
    assert!(!children[0].equals(&start));
}
