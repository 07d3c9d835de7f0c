//! The game session aggregate.
//!
//! One `GameSession` holds everything a history snapshot must restore:
//! the board, the mine layout, whose turn it is, the turn count, and the
//! per-player removal state. No ambient state exists anywhere else; the
//! controller owns exactly one live session and mutates it in place.

use serde::{Deserialize, Serialize};

use crate::board::{Board, MineLayout};
use crate::core::{GameRng, Player, PlayerPair, SessionConfig};
use crate::session::removal::RemovalState;

/// Turn count at session start: the four initial discs.
pub const INITIAL_TURN_COUNT: u32 = 4;

/// Complete mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Disc occupancy.
    pub board: Board,

    /// Hidden mines. Empty when mine mode is off.
    pub mines: MineLayout,

    /// The side to move.
    pub current_player: Player,

    /// Discs placed so far, counting the initial four. Increments once
    /// per placement, never per flip or removal.
    pub turn_count: u32,

    /// Removal allowance and cooldown, per side.
    pub removal: PlayerPair<RemovalState>,
}

impl GameSession {
    /// A fresh session: standard opening, Black to move, mines scattered
    /// when mine mode is on.
    #[must_use]
    pub fn new(config: &SessionConfig, rng: &mut GameRng) -> Self {
        let mines = if config.mine_mode {
            MineLayout::scatter(rng, config.max_mines)
        } else {
            MineLayout::empty()
        };

        Self {
            board: Board::starting_position(),
            mines,
            current_player: Player::Black,
            turn_count: INITIAL_TURN_COUNT,
            removal: PlayerPair::with_value(RemovalState::new(config.max_remove_count)),
        }
    }
}
