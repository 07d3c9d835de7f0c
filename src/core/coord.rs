//! Board coordinates and compass directions.
//!
//! The board is a fixed 8×8 grid. `Coord` is a validated (row, column)
//! pair; constructing one out of bounds is a caller contract violation
//! and is only checked in debug builds.

use serde::{Deserialize, Serialize};

/// Board side length. The engine is hardwired to the 8×8 ruleset.
pub const BOARD_SIZE: usize = 8;

/// The 8 compass directions as (row delta, column delta).
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A (row, column) position on the board, both in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate. Out-of-bounds input is a caller bug.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE, "row out of bounds: {row}");
        debug_assert!((col as usize) < BOARD_SIZE, "col out of bounds: {col}");
        Self { row, col }
    }

    /// Row index (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Step in a direction, returning `None` when leaving the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate every cell in row-major order.
    ///
    /// Row-major ordering is load-bearing: legal-move enumeration and the
    /// AI tie-break both rely on it being stable.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }

    /// The 3×3 neighborhood centered here, clipped to the board,
    /// including the center itself.
    pub fn neighborhood(self) -> impl Iterator<Item = Coord> {
        [-1i8, 0, 1].into_iter().flat_map(move |dr| {
            [-1i8, 0, 1]
                .into_iter()
                .filter_map(move |dc| self.offset(dr, dc))
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_in_bounds() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Coord::new(1, 1)));

        let far = Coord::new(7, 7);
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(0, 1), None);
        assert_eq!(far.offset(-1, -1), Some(Coord::new(6, 6)));
    }

    #[test]
    fn test_all_is_row_major() {
        let cells: Vec<_> = Coord::all().collect();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[1], Coord::new(0, 1));
        assert_eq!(cells[8], Coord::new(1, 0));
        assert_eq!(cells[63], Coord::new(7, 7));

        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(cells, sorted);
    }

    #[test]
    fn test_neighborhood_clips_at_edges() {
        let corner: Vec<_> = Coord::new(0, 0).neighborhood().collect();
        assert_eq!(corner.len(), 4);
        assert!(corner.contains(&Coord::new(0, 0)));
        assert!(corner.contains(&Coord::new(0, 1)));
        assert!(corner.contains(&Coord::new(1, 0)));
        assert!(corner.contains(&Coord::new(1, 1)));

        let interior: Vec<_> = Coord::new(4, 4).neighborhood().collect();
        assert_eq!(interior.len(), 9);

        let edge: Vec<_> = Coord::new(0, 4).neighborhood().collect();
        assert_eq!(edge.len(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(2, 3)), "(2, 3)");
    }

    #[test]
    fn test_serde_round_trip() {
        let coord = Coord::new(5, 6);
        let json = serde_json::to_string(&coord).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, back);
    }
}
