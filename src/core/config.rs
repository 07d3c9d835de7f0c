//! Session configuration.
//!
//! A `SessionConfig` is assembled once, before the session starts, and
//! never changes during play. The controller reads it; nothing writes it.
//!
//! Defaults mirror the classic setup: passing and undo on, CPU opponent
//! and mines off, three removals unlocking at turn 20 with a three-turn
//! cooldown, three mines when mine mode is switched on.

use serde::{Deserialize, Serialize};

/// Immutable per-session options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// White is played by the heuristic opponent.
    pub cpu_enabled: bool,

    /// A player with no legal move passes instead of ending the game.
    pub pass_enabled: bool,

    /// Undo is offered at all.
    pub undo_enabled: bool,

    /// Hidden mines are scattered at session start.
    pub mine_mode: bool,

    /// Random removals granted to each player. Zero disables the
    /// feature entirely (control hidden, execution a no-op).
    pub max_remove_count: u32,

    /// Turn count at which removals unlock.
    pub remove_start_turn: u32,

    /// Minimum turns between two removals by the same player.
    pub remove_interval: u32,

    /// Mines scattered when `mine_mode` is on. At most 60 cells are
    /// eligible (the center 2×2 block never holds a mine).
    pub max_mines: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cpu_enabled: false,
            pass_enabled: true,
            undo_enabled: true,
            mine_mode: false,
            max_remove_count: 3,
            remove_start_turn: 20,
            remove_interval: 3,
            max_mines: 3,
        }
    }
}

impl SessionConfig {
    /// Start from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the CPU opponent.
    #[must_use]
    pub fn with_cpu(mut self, enabled: bool) -> Self {
        self.cpu_enabled = enabled;
        self
    }

    /// Enable or disable passing.
    #[must_use]
    pub fn with_pass(mut self, enabled: bool) -> Self {
        self.pass_enabled = enabled;
        self
    }

    /// Enable or disable undo.
    #[must_use]
    pub fn with_undo(mut self, enabled: bool) -> Self {
        self.undo_enabled = enabled;
        self
    }

    /// Enable or disable mine mode.
    #[must_use]
    pub fn with_mines(mut self, enabled: bool) -> Self {
        self.mine_mode = enabled;
        self
    }

    /// Set the per-player removal allowance.
    #[must_use]
    pub fn with_remove_count(mut self, count: u32) -> Self {
        self.max_remove_count = count;
        self
    }

    /// Set the turn at which removals unlock.
    #[must_use]
    pub fn with_remove_start_turn(mut self, turn: u32) -> Self {
        self.remove_start_turn = turn;
        self
    }

    /// Set the removal cooldown in turns.
    #[must_use]
    pub fn with_remove_interval(mut self, turns: u32) -> Self {
        self.remove_interval = turns;
        self
    }

    /// Set the mine count used when mine mode is on.
    ///
    /// Capped by callers' good sense; the board only has 60 eligible
    /// cells, and `MineLayout::scatter` asserts the cap.
    #[must_use]
    pub fn with_max_mines(mut self, count: u32) -> Self {
        self.max_mines = count;
        self
    }

    /// Whether the removal house rule participates in this session.
    #[must_use]
    pub fn removal_enabled(&self) -> bool {
        self.max_remove_count > 0
    }
}
