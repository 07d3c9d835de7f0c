//! Hidden mine layout.
//!
//! Mines are per-cell flags scattered once at session start and invisible
//! to the player. The central 2×2 block never holds a mine so the four
//! starting discs are always safe.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameRng, BOARD_SIZE};

/// Cells that can never hold a mine: the four starting squares.
const CENTER_BLOCK: [(usize, usize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// Number of cells eligible for a mine.
pub const ELIGIBLE_CELLS: usize = BOARD_SIZE * BOARD_SIZE - CENTER_BLOCK.len();

/// The 8×8 mine grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    mines: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl MineLayout {
    /// A layout with no mines (mine mode off).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scatter `count` mines on uniformly random cells outside the
    /// center block, by rejection sampling. Distinct cells; exactly
    /// `count` mines afterward.
    ///
    /// `count` must not exceed the number of eligible cells.
    #[must_use]
    pub fn scatter(rng: &mut GameRng, count: u32) -> Self {
        assert!(
            count as usize <= ELIGIBLE_CELLS,
            "at most {ELIGIBLE_CELLS} mines fit on the board"
        );

        let mut layout = Self::empty();
        let mut placed = 0;
        while placed < count {
            let row = rng.gen_range_usize(0..BOARD_SIZE) as u8;
            let col = rng.gen_range_usize(0..BOARD_SIZE) as u8;
            let coord = Coord::new(row, col);
            if Self::is_eligible(coord) && !layout.contains(coord) {
                layout.mines[coord.row()][coord.col()] = true;
                placed += 1;
            }
        }
        layout
    }

    /// A deterministic layout from explicit cells, for fixtures and
    /// resumed sessions. Center-block cells are a caller bug.
    #[must_use]
    pub fn with_mines(cells: &[Coord]) -> Self {
        let mut layout = Self::empty();
        for &coord in cells {
            debug_assert!(Self::is_eligible(coord), "mine at {coord} is inside the center block");
            layout.mines[coord.row()][coord.col()] = true;
        }
        layout
    }

    /// Whether a cell may hold a mine.
    #[must_use]
    pub fn is_eligible(coord: Coord) -> bool {
        !CENTER_BLOCK.contains(&(coord.row(), coord.col()))
    }

    /// Whether a mine is hidden at `coord`.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.mines[coord.row()][coord.col()]
    }

    /// Remove the mine at `coord`, if any.
    pub fn clear(&mut self, coord: Coord) {
        self.mines[coord.row()][coord.col()] = false;
    }

    /// Number of mines still hidden.
    #[must_use]
    pub fn count(&self) -> u32 {
        Coord::all().filter(|&c| self.contains(c)).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_places_exact_count() {
        let mut rng = GameRng::new(42);
        let layout = MineLayout::scatter(&mut rng, 5);
        assert_eq!(layout.count(), 5);
    }

    #[test]
    fn test_scatter_avoids_center_block() {
        // Many mines on many seeds, so every eligible cell gets exercised.
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let layout = MineLayout::scatter(&mut rng, 30);

            for (row, col) in CENTER_BLOCK {
                assert!(!layout.contains(Coord::new(row as u8, col as u8)));
            }
        }
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        assert_eq!(
            MineLayout::scatter(&mut rng1, 10),
            MineLayout::scatter(&mut rng2, 10)
        );
    }

    #[test]
    fn test_scatter_can_fill_every_eligible_cell() {
        let mut rng = GameRng::new(1);
        let layout = MineLayout::scatter(&mut rng, ELIGIBLE_CELLS as u32);

        assert_eq!(layout.count(), ELIGIBLE_CELLS as u32);
        for coord in Coord::all() {
            assert_eq!(layout.contains(coord), MineLayout::is_eligible(coord));
        }
    }

    #[test]
    fn test_with_mines_and_clear() {
        let mut layout = MineLayout::with_mines(&[Coord::new(0, 0), Coord::new(7, 7)]);

        assert!(layout.contains(Coord::new(0, 0)));
        assert!(layout.contains(Coord::new(7, 7)));
        assert_eq!(layout.count(), 2);

        layout.clear(Coord::new(0, 0));
        assert!(!layout.contains(Coord::new(0, 0)));
        assert_eq!(layout.count(), 1);

        // Clearing an unmined cell is a no-op.
        layout.clear(Coord::new(3, 0));
        assert_eq!(layout.count(), 1);
    }

    #[test]
    fn test_empty_layout() {
        let layout = MineLayout::empty();
        assert_eq!(layout.count(), 0);
        assert!(!layout.contains(Coord::new(0, 0)));
    }
}
