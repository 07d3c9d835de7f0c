//! Disc occupancy grid.
//!
//! `Board` is pure data plus accessors: an 8×8 mapping from coordinates
//! to `CellState`. Every coordinate holds exactly one state at all times;
//! the enum makes invalid encodings unrepresentable.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Player, BOARD_SIZE};

/// Occupancy of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Black,
    White,
}

impl CellState {
    /// The disc color occupying this cell, if any.
    #[must_use]
    pub const fn disc(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Player::Black),
            CellState::White => Some(Player::White),
        }
    }

    /// Whether the cell is unoccupied.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

/// Disc totals per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscCount {
    pub black: u32,
    pub white: u32,
}

impl DiscCount {
    /// Total discs on the board.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.black + self.white
    }

    /// The side with strictly more discs, `None` on equal counts.
    #[must_use]
    pub const fn leader(self) -> Option<Player> {
        if self.black > self.white {
            Some(Player::Black)
        } else if self.white > self.black {
            Some(Player::White)
        } else {
            None
        }
    }
}

/// The 8×8 occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    /// An entirely empty grid.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard opening: White at (3,3) and (4,4), Black at (3,4)
    /// and (4,3).
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        board.set(Coord::new(3, 3), CellState::White);
        board.set(Coord::new(3, 4), CellState::Black);
        board.set(Coord::new(4, 3), CellState::Black);
        board.set(Coord::new(4, 4), CellState::White);
        board
    }

    /// State of one cell.
    #[must_use]
    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[coord.row()][coord.col()]
    }

    /// Overwrite one cell.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        self.cells[coord.row()][coord.col()] = state;
    }

    /// Place a disc on an empty cell. The caller guarantees emptiness;
    /// that precondition is only checked in debug builds.
    pub fn place(&mut self, coord: Coord, player: Player) {
        debug_assert!(self.get(coord).is_empty(), "cell {coord} is occupied");
        self.set(coord, player.into());
    }

    /// Convert an opponent disc to `player`'s color.
    pub fn flip(&mut self, coord: Coord, player: Player) {
        debug_assert_eq!(
            self.get(coord).disc(),
            Some(player.opponent()),
            "flip target {coord} does not hold the opponent's disc"
        );
        self.set(coord, player.into());
    }

    /// Clear the 3×3 block centered on `center`, clipped to the board.
    pub fn clear_neighborhood(&mut self, center: Coord) {
        for coord in center.neighborhood() {
            self.set(coord, CellState::Empty);
        }
    }

    /// Count discs per side.
    #[must_use]
    pub fn count_discs(&self) -> DiscCount {
        let mut count = DiscCount::default();
        for coord in Coord::all() {
            match self.get(coord) {
                CellState::Black => count.black += 1,
                CellState::White => count.white += 1,
                CellState::Empty => {}
            }
        }
        count
    }

    /// Every occupied cell, in row-major order.
    #[must_use]
    pub fn occupied_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| !self.get(c).is_empty()).collect()
    }

    /// Iterate all cells with their states, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        Coord::all().map(move |c| (c, self.get(c)))
    }
}
