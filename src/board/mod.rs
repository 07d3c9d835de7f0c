//! Board state: disc occupancy and the hidden mine layout.

pub mod grid;
pub mod mines;

pub use grid::{Board, CellState, DiscCount};
pub use mines::{MineLayout, ELIGIBLE_CELLS};
