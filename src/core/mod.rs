//! Core engine types: coordinates, players, RNG, configuration.
//!
//! These are the game-agnostic building blocks everything else sits on.

pub mod config;
pub mod coord;
pub mod player;
pub mod rng;

pub use config::SessionConfig;
pub use coord::{Coord, BOARD_SIZE, DIRECTIONS};
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState};
