//! Tangram Puzzle Inspector
//!
//! Loads a tiling puzzle (a board and a set of polyomino pieces) and exposes
//! the puzzle state's primitives from the command line: render the board,
//! list the frontier piece's legal moves, play a sequence of moves, and
//! check the piece set against the board. Searching for a solution is left
//! to an external driver.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use tangram::geometry::Symmetry;
use tangram::grid::{Board, SAMPLE_BOARD};
use tangram::pieces::{parse_pieces, sample_pieces, Shape, Tangram};
use tangram::{Move, TangramPuzzle};

/// Inspects a polyomino tiling puzzle one state at a time.
#[derive(Parser)]
#[command(name = "tangram")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log puzzle construction and every executed move.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Where the puzzle comes from. Without files the built-in sample is used.
#[derive(Args, Default)]
struct PuzzleArgs {
    /// Board file: `*` marks an empty cell, any other character a blocked one.
    #[arg(long)]
    board: Option<PathBuf>,
    /// Piece file: blocks of `*` rows separated by blank lines.
    #[arg(long)]
    pieces: Option<PathBuf>,
    /// Allow rotations only; pieces may not be flipped over.
    #[arg(long)]
    no_flip: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render the board.
    Show(PuzzleArgs),
    /// List legal moves for the frontier piece.
    Moves(PuzzleArgs),
    /// Execute moves in order and render the result.
    Play {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// A move as `row,column,orientation,piece`. Repeatable.
        #[arg(long = "move", value_parser = parse_move)]
        moves: Vec<Move>,
    },
    /// Compare the pieces' total size with the board's empty cells.
    Check(PuzzleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Command::Show(args)) => print!("{}", load_puzzle(&args)?.board()),
        Some(Command::Moves(args)) => print!("{}", format_moves(&load_puzzle(&args)?)),
        Some(Command::Play { puzzle, moves }) => {
            let mut state = load_puzzle(&puzzle)?;
            print!("{}", play(&mut state, &moves)?);
        }
        Some(Command::Check(args)) => print!("{}", check(&load_puzzle(&args)?)),
        None => {
            // default: show the sample puzzle and its first moves
            let state = load_puzzle(&PuzzleArgs::default())?;
            print!("{}", state.board());
            print!("{}", format_moves(&state));
        }
    }

    Ok(())
}

/// Builds the initial state from files, or from the sample puzzle.
fn load_puzzle(args: &PuzzleArgs) -> Result<TangramPuzzle<Tangram>> {
    let symmetry = if args.no_flip {
        Symmetry::Rotations
    } else {
        Symmetry::RotationsAndReflections
    };

    let board = match &args.board {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read board {}", path.display()))?;
            Board::parse(&text).with_context(|| format!("Invalid board {}", path.display()))?
        }
        None => Board::parse(SAMPLE_BOARD)?,
    };

    let pieces = match &args.pieces {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read pieces {}", path.display()))?;
            parse_pieces(&text, symmetry)
                .with_context(|| format!("Invalid pieces {}", path.display()))?
        }
        None => sample_pieces(symmetry),
    };

    Ok(TangramPuzzle::with_board(board, pieces))
}

/// Parses `row,column,orientation,piece`.
fn parse_move(text: &str) -> Result<Move, String> {
    let fields: Vec<usize> = text
        .split(',')
        .map(|field| field.trim().parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid move '{text}': {e}"))?;

    match fields[..] {
        [row, column, orientation, piece_id] => Ok(Move {
            row,
            column,
            orientation,
            piece_id,
        }),
        _ => Err(format!(
            "invalid move '{text}': expected row,column,orientation,piece"
        )),
    }
}

/// Lists the frontier piece's moves, one per line.
fn format_moves(state: &TangramPuzzle<Tangram>) -> String {
    let Some(frontier) = state.inventory().first() else {
        return "no pieces left\n".to_string();
    };

    let moves = state.possible_moves();
    if moves.is_empty() {
        return format!("no moves for piece {}: dead end\n", frontier.id());
    }

    let mut output = format!(
        "{} moves for piece {} ({} cells):\n",
        moves.len(),
        frontier.id(),
        frontier.shape().covered_cell_count()
    );
    for mv in &moves {
        output.push_str(&format!("{mv}\n"));
    }
    output
}

/// Executes `moves` in order and renders the final board.
fn play(state: &mut TangramPuzzle<Tangram>, moves: &[Move]) -> Result<String> {
    for (i, mv) in moves.iter().enumerate() {
        state
            .execute(mv)
            .with_context(|| format!("Move {} ({mv}) rejected", i + 1))?;
    }

    let mut output = state.board().to_string();
    if state.is_goal() {
        output.push_str(&format!(
            "goal reached after {} moves\n",
            state.choices_taken()
        ));
    } else {
        output.push_str(&format!(
            "{} empty cells left, heuristic {}\n",
            state.empty_cells(),
            state.heuristic()
        ));
    }
    Ok(output)
}

/// Reports whether the pieces exactly cover the empty cells.
fn check(state: &TangramPuzzle<Tangram>) -> String {
    let mut output = format!(
        "empty cells: {}\npieces: {} covering {} cells\n",
        state.empty_cells(),
        state.inventory().len(),
        state.piece_cell_total()
    );

    let leftover = state.leftover_cells();
    match leftover {
        0 => output.push_str("consistent\n"),
        n if n > 0 => {
            log::warn!("pieces cover {n} more cells than the board has empty");
            output.push_str(&format!(
                "pieces exceed the board by {n} cells; a goal will leave pieces unplaced\n"
            ));
        }
        n => {
            log::warn!("pieces cover {} fewer cells than the board has empty", -n);
            output.push_str(&format!(
                "pieces fall short by {} cells; no goal is reachable\n",
                -n
            ));
        }
    }
    output
}
