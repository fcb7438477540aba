//! Benchmarks for the puzzle state primitives.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tangram::geometry::{all_orientations, Symmetry};
use tangram::grid::{Board, SAMPLE_BOARD};
use tangram::pieces::{sample_pieces, Tangram};
use tangram::TangramPuzzle;

fn sample_state() -> TangramPuzzle<Tangram> {
    let board = Board::parse(SAMPLE_BOARD).expect("sample board parses");
    TangramPuzzle::with_board(board, sample_pieces(Symmetry::RotationsAndReflections))
}

/// Benchmark enumerating the frontier piece's moves on the empty sample board.
fn bench_possible_moves(c: &mut Criterion) {
    let state = sample_state();

    c.bench_function("possible_moves", |b| {
        b.iter(|| black_box(&state).possible_moves())
    });
}

/// Benchmark cloning a state and executing one move on the clone, the unit
/// of work of a branching driver.
fn bench_clone_and_execute(c: &mut Criterion) {
    let state = sample_state();
    let mv = state.possible_moves()[0];

    c.bench_function("clone_and_execute", |b| {
        b.iter(|| {
            let mut child = black_box(&state).clone();
            child.execute(black_box(&mv)).expect("enumerated move executes");
            child
        })
    });
}

/// Benchmark generating all orientations of the P pentomino.
fn bench_orientations(c: &mut Criterion) {
    let piece = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)];

    c.bench_function("all_orientations", |b| {
        b.iter(|| all_orientations(black_box(&piece), Symmetry::RotationsAndReflections))
    });
}

/// Benchmark rendering the sample board.
fn bench_format_board(c: &mut Criterion) {
    let state = sample_state();

    c.bench_function("format_board", |b| {
        b.iter(|| black_box(state.board()).to_string())
    });
}

criterion_group!(
    benches,
    bench_possible_moves,
    bench_clone_and_execute,
    bench_orientations,
    bench_format_board
);
criterion_main!(benches);
