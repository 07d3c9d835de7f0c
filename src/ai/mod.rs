//! One-ply heuristic opponent.
//!
//! No search: each legal move is scored as its positional weight plus or
//! minus its flip count, and the best score wins. With passing enabled
//! the flip count is *subtracted*: taking good squares while flipping
//! little leaves the opponent fewer replies when a stuck board costs
//! them a turn. With passing disabled it is *added*, since with no pass
//! to exploit raw material is what survival rests on.
//!
//! Ties go to the earliest move in row-major order because the running
//! best is only replaced on a strictly greater score. The tie-break is
//! documented behavior; tests pin it.

use crate::board::Board;
use crate::core::{Coord, Player, BOARD_SIZE};
use crate::rules::{flippable_discs, valid_moves};

/// Positional value of every square: corners dominate, the squares that
/// hand a corner to the opponent are penalized, edges beat the interior.
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 5, 10, 10, 5, -20, 120],
    [-20, -50, -5, -5, -5, -5, -50, -20],
    [5, -5, 15, 7, 7, 15, -5, 5],
    [10, -5, 7, 3, 3, 7, -5, 10],
    [10, -5, 7, 3, 3, 7, -5, 10],
    [5, -5, 15, 7, 7, 15, -5, 5],
    [-20, -50, -5, -5, -5, -5, -50, -20],
    [120, -20, 5, 10, 10, 5, -20, 120],
];

/// Positional weight of one square.
#[must_use]
pub fn position_weight(coord: Coord) -> i32 {
    POSITION_WEIGHTS[coord.row()][coord.col()]
}

/// Heuristic score of one candidate move.
#[must_use]
pub fn score_move(board: &Board, coord: Coord, player: Player, pass_enabled: bool) -> i32 {
    let flips = flippable_discs(board, coord, player).len() as i32;
    if pass_enabled {
        position_weight(coord) - flips
    } else {
        position_weight(coord) + flips
    }
}

/// Pick the best-scoring legal move for `player`, `None` when the
/// player is stuck.
///
/// Scans legal moves in row-major order and replaces the running best
/// only on a strictly greater score, so the first of several equally
/// scored moves wins.
#[must_use]
pub fn choose_move(board: &Board, player: Player, pass_enabled: bool) -> Option<Coord> {
    let mut best: Option<(Coord, i32)> = None;

    for coord in valid_moves(board, player) {
        let score = score_move(board, coord, player, pass_enabled);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((coord, score));
        }
    }

    best.map(|(coord, _)| coord)
}
