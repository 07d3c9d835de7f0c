//! # reversi-rules
//!
//! A rule engine for an 8×8 Reversi/Othello variant with three optional
//! house rules:
//!
//! - **Passing control**: a stuck player passes, or, with passing
//!   disabled, the game ends on the spot.
//! - **Random removal**: each side may delete a uniformly random disc,
//!   gated by a per-player allowance, an unlock turn, and a cooldown.
//! - **Mines**: hidden cells that erase a 3×3 neighborhood a fixed
//!   delay after being covered by a placement.
//!
//! The engine owns legal-move computation, flipping, the
//! turn/pass/endgame state machine, a snapshot-based undo history, and
//! a one-ply heuristic opponent. Rendering and input wiring are
//! external collaborators: they read [`control::ViewState`] and invoke
//! [`control::TurnController`] operations.
//!
//! ## Design principles
//!
//! 1. **One aggregate**: all mutable state lives in a single
//!    [`session::GameSession`], exclusively owned by the controller.
//! 2. **Silent no-ops**: rule violations (occupied cell, ineligible
//!    removal, undo on empty history) leave state unchanged and return
//!    `false`; they are not errors.
//! 3. **Deterministic time and randomness**: delays run on a virtual
//!    clock driven by [`control::TurnController::advance`], and all
//!    randomness flows through the seeded [`core::GameRng`].
//!
//! ## Modules
//!
//! - `core`: coordinates, players, RNG, configuration
//! - `board`: disc occupancy and the hidden mine layout
//! - `rules`: flip computation and legal-move enumeration
//! - `session`: the session aggregate, undo history, removal counters
//! - `control`: the turn state machine and view-model queries
//! - `ai`: the heuristic opponent

pub mod ai;
pub mod board;
pub mod control;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Coord, GameRng, Player, PlayerPair, SessionConfig, BOARD_SIZE};

pub use crate::board::{Board, CellState, DiscCount, MineLayout};

pub use crate::rules::{flippable_discs, has_move, valid_moves, FlipSet};

pub use crate::session::{GameSession, History, RemovalAvailability, RemovalState};

pub use crate::control::{
    ControlState, GameOutcome, Notice, Phase, TurnController, ViewState, CPU_DELAY_MS,
    EXPLOSION_DELAY_MS, PASS_DELAY_MS,
};

pub use crate::ai::{choose_move, position_weight, POSITION_WEIGHTS};
