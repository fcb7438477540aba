//! Piece shapes, orientation masks and piece-list parsing.
//!
//! The puzzle state only sees pieces through the [`Shape`] trait. [`Tangram`]
//! is the shape used by the command line and the sample puzzle: a set of unit
//! cells whose orientations are generated once, at construction.

use crate::error::PieceError;
use crate::geometry::{all_orientations, normalize_to_origin, Coord, Symmetry};

/// Identifier of a piece: its zero-based position in the input piece list.
pub type PieceId = usize;

/// Marker for a covered cell in piece and board text.
pub const COVERED: char = '*';

/// One orientation of a piece, as a covered/uncovered bounding-box grid.
///
/// The mask origin is its top-left corner; a placement anchors that corner on
/// a board cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    height: usize,
    width: usize,
    /// Row-major covered flags, `height * width` long.
    cells: Vec<bool>,
}

impl Mask {
    /// Builds the mask of a set of non-negative cells.
    ///
    /// The bounding box spans from the origin to the largest row and column.
    /// Returns `None` if any cell has a negative coordinate.
    pub fn from_cells(cells: &[Coord]) -> Option<Self> {
        let cells: Vec<(usize, usize)> = cells
            .iter()
            .map(|&(r, c)| Some((usize::try_from(r).ok()?, usize::try_from(c).ok()?)))
            .collect::<Option<_>>()?;

        let height = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        let mut covered = vec![false; height * width];
        for &(r, c) in &cells {
            covered[r * width + c] = true;
        }
        Some(Self {
            height,
            width,
            cells: covered,
        })
    }

    /// Builds a mask from text rows, `*` marking covered cells.
    ///
    /// Short rows are padded with uncovered cells; nothing is trimmed.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut cells = vec![false; height * width];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                cells[r * width + c] = ch == COVERED;
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns whether the cell at `(row, column)` is covered.
    ///
    /// Cells outside the bounding box are uncovered.
    #[inline]
    pub fn is_covered(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width && self.cells[row * self.width + column]
    }

    /// Number of covered cells in one mask row.
    pub fn row_covered_count(&self, row: usize) -> usize {
        if row >= self.height {
            return 0;
        }
        self.cells[row * self.width..(row + 1) * self.width]
            .iter()
            .filter(|&&covered| covered)
            .count()
    }

    /// Total number of covered cells.
    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|&&covered| covered).count()
    }

    /// Covered cells as `(row, column)` offsets from the origin, row-major.
    pub fn covered_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &covered)| covered)
            .map(move |(i, _)| (i / self.width, i % self.width))
    }
}

/// What the puzzle state needs to know about a piece.
pub trait Shape {
    /// Distinct orientation masks, in a fixed order. Move orientation indices
    /// refer to positions in this slice.
    fn orientations(&self) -> &[Mask];

    /// Number of cells the piece covers in any orientation.
    fn covered_cell_count(&self) -> usize;
}

/// A polyomino piece with precomputed orientations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tangram {
    orientations: Vec<Mask>,
    covered: usize,
}

impl Tangram {
    /// Creates a piece from its cells, at any offset.
    ///
    /// Returns `None` if `cells` is empty. Duplicate cells count once.
    pub fn new(cells: &[Coord], symmetry: Symmetry) -> Option<Self> {
        let normalized = normalize_to_origin(cells.to_vec());
        if normalized.is_empty() {
            return None;
        }

        let orientations = all_orientations(&normalized, symmetry)
            .iter()
            .map(|orientation| Mask::from_cells(orientation))
            .collect::<Option<_>>()?;

        Some(Self {
            orientations,
            covered: normalized.len(),
        })
    }

    /// Creates a piece from text rows, `*` marking covered cells.
    ///
    /// Leading blank rows and columns are trimmed away, so orientation 0 is
    /// the drawn shape pressed into its top-left corner.
    pub fn from_rows(rows: &[&str], symmetry: Symmetry) -> Option<Self> {
        let cells: Vec<Coord> = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == COVERED)
                    .map(move |(c, _)| (r as i32, c as i32))
            })
            .collect();
        Self::new(&cells, symmetry)
    }
}

impl Shape for Tangram {
    fn orientations(&self) -> &[Mask] {
        &self.orientations
    }

    fn covered_cell_count(&self) -> usize {
        self.covered
    }
}

/// Parses a piece list: blocks of rows separated by blank lines.
///
/// Within a block `*` marks a covered cell and any other character an
/// uncovered one.
pub fn parse_pieces(text: &str, symmetry: Symmetry) -> Result<Vec<Tangram>, PieceError> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .iter()
        .enumerate()
        .map(|(index, rows)| {
            Tangram::from_rows(rows, symmetry).ok_or(PieceError::EmptyShape { index })
        })
        .collect()
}

/// Pieces of the built-in sample puzzle, in input order.
///
/// Together they tile [`crate::grid::SAMPLE_BOARD`] exactly.
pub const SAMPLE_PIECES: &[&[&str]] = &[
    // bar (3 cells)
    &["***"],
    // square (4 cells)
    &["**", "**"],
    // P pentomino (5 cells)
    &["**", "**", "*"],
    // J tetromino (4 cells)
    &["***", "..*"],
];

/// Builds the sample puzzle's pieces.
pub fn sample_pieces(symmetry: Symmetry) -> Vec<Tangram> {
    SAMPLE_PIECES
        .iter()
        .filter_map(|rows| Tangram::from_rows(rows, symmetry))
        .collect()
}
