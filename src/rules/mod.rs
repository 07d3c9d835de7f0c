//! Flip computation and legal-move enumeration.
//!
//! Stateless given a board snapshot: these functions never mutate the
//! board. A move is legal exactly when it would flip at least one disc.
//!
//! `valid_moves` enumerates in row-major order. That ordering is part of
//! the contract: the heuristic opponent breaks score ties by earliest
//! position in this enumeration.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, Player, DIRECTIONS};

/// Discs captured by one move. Inline capacity covers all but the most
/// lopsided positions; a single move can flip at most 18 discs.
pub type FlipSet = SmallVec<[Coord; 18]>;

/// Every disc that placing `player` at `coord` would flip.
///
/// Empty when `coord` is occupied. For each compass direction, walks
/// outward over opponent discs and keeps the run only if it terminates
/// on one of `player`'s discs within bounds; runs ending off-board or on
/// an empty cell contribute nothing.
#[must_use]
pub fn flippable_discs(board: &Board, coord: Coord, player: Player) -> FlipSet {
    let mut flips = FlipSet::new();
    if !board.get(coord).is_empty() {
        return flips;
    }

    let opponent = player.opponent();
    for (dr, dc) in DIRECTIONS {
        let run_start = flips.len();
        let mut cursor = coord.offset(dr, dc);
        let mut anchored = false;

        while let Some(cell) = cursor {
            match board.get(cell).disc() {
                Some(color) if color == opponent => {
                    flips.push(cell);
                    cursor = cell.offset(dr, dc);
                }
                Some(_) => {
                    // Our own disc closes the bracket.
                    anchored = true;
                    break;
                }
                None => break,
            }
        }

        // Runs that end off-board or on an empty cell flip nothing.
        if !anchored || flips.len() == run_start {
            flips.truncate(run_start);
        }
    }

    flips
}

/// Every legal move for `player`, in row-major order.
#[must_use]
pub fn valid_moves(board: &Board, player: Player) -> Vec<Coord> {
    Coord::all()
        .filter(|&coord| !flippable_discs(board, coord, player).is_empty())
        .collect()
}

/// Whether `player` has any legal move.
#[must_use]
pub fn has_move(board: &Board, player: Player) -> bool {
    Coord::all().any(|coord| !flippable_discs(board, coord, player).is_empty())
}
