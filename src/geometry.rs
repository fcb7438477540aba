//! 2D rotation and reflection utilities.
//!
//! A square has 8 symmetries (the dihedral group of order 8): 4 rotations
//! and 4 reflections. Pieces that may be flipped over use all 8, pieces that
//! may only be turned use the first 4.

use rustc_hash::FxHashSet;

/// A 2D cell position as `(row, column)`.
pub type Coord = (i32, i32);

/// Which symmetries a piece may be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symmetry {
    /// Quarter turns only.
    Rotations,
    /// Quarter turns and flips.
    #[default]
    RotationsAndReflections,
}

impl Symmetry {
    /// The transforms allowed under this symmetry, identity first.
    pub fn transforms(self) -> &'static [fn(Coord) -> Coord] {
        match self {
            Symmetry::Rotations => &TRANSFORMS[..4],
            Symmetry::RotationsAndReflections => &TRANSFORMS,
        }
    }
}

/// All 8 symmetries of the square.
///
/// - Transforms 0-3: quarter turns clockwise
/// - Transforms 4-7: mirror across the vertical axis, then the same turns
pub static TRANSFORMS: [fn(Coord) -> Coord; 8] = [
    |(r, c)| (r, c),   // 0 degrees
    |(r, c)| (c, -r),  // 90 degrees
    |(r, c)| (-r, -c), // 180 degrees
    |(r, c)| (-c, r),  // 270 degrees
    |(r, c)| (r, -c),
    |(r, c)| (-c, -r),
    |(r, c)| (-r, c),
    |(r, c)| (c, r),
];

/// Generates all distinct orientations of a piece.
///
/// Applies every allowed transform, normalizes each result so the minimum
/// row and column are zero, then drops duplicates. Unlike a sorted dedup this
/// keeps first-seen order, so orientation 0 is always the piece as given.
pub fn all_orientations(piece: &[Coord], symmetry: Symmetry) -> Vec<Vec<Coord>> {
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut orientations = Vec::new();

    for transform in symmetry.transforms() {
        let transformed: Vec<Coord> = piece.iter().map(|&coord| transform(coord)).collect();
        let normalized = normalize_to_origin(transformed);
        if seen.insert(normalized.clone()) {
            orientations.push(normalized);
        }
    }

    orientations
}

/// Translates coordinates so the minimum row and column are zero, and sorts
/// them row-major so equal shapes compare equal.
pub fn normalize_to_origin(mut coords: Vec<Coord>) -> Vec<Coord> {
    let min_row = coords.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_col = coords.iter().map(|&(_, c)| c).min().unwrap_or(0);

    for (r, c) in &mut coords {
        *r -= min_row;
        *c -= min_col;
    }

    coords.sort_unstable();
    coords.dedup();
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &[Coord] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
    const BAR: &[Coord] = &[(0, 0), (0, 1), (0, 2)];
    const L_TETROMINO: &[Coord] = &[(0, 0), (1, 0), (2, 0), (2, 1)];

    #[test]
    fn test_transforms_preserve_distance_from_origin() {
        for (i, transform) in TRANSFORMS.iter().enumerate() {
            let (r, c) = transform((2, 5));
            assert_eq!(r * r + c * c, 29, "Transform {i} is not an isometry");
        }
    }

    #[test]
    fn test_transforms_are_distinct() {
        let images: FxHashSet<Coord> = TRANSFORMS.iter().map(|t| t((1, 2))).collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_first_orientation_is_identity() {
        let orientations = all_orientations(L_TETROMINO, Symmetry::RotationsAndReflections);
        assert_eq!(orientations[0], L_TETROMINO.to_vec());
    }

    #[test]
    fn test_symmetric_pieces_collapse() {
        assert_eq!(all_orientations(SQUARE, Symmetry::RotationsAndReflections).len(), 1);
        assert_eq!(all_orientations(BAR, Symmetry::RotationsAndReflections).len(), 2);
    }

    #[test]
    fn test_chiral_piece_orientation_counts() {
        assert_eq!(all_orientations(L_TETROMINO, Symmetry::Rotations).len(), 4);
        assert_eq!(
            all_orientations(L_TETROMINO, Symmetry::RotationsAndReflections).len(),
            8
        );
    }

    #[test]
    fn test_normalize_shifts_to_origin() {
        let normalized = normalize_to_origin(vec![(3, -1), (2, -2), (2, -1)]);
        assert_eq!(normalized, vec![(0, 0), (0, 1), (1, 1)]);
    }
}
