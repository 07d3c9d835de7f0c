//! Removal house rule: per-player allowance and cooldown.
//!
//! Each side gets a fixed number of random-disc removals, unlocked at a
//! configured turn and separated by a per-player cooldown. Execution
//! lives in the controller; this module owns the counters and the
//! eligibility decision the controller and the render collaborator share.

use serde::{Deserialize, Serialize};

use crate::core::{Player, SessionConfig};
use crate::session::GameSession;

/// One side's removal counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalState {
    /// Uses left.
    pub remaining: u32,

    /// Turn count at the most recent use. `None` until first use, so
    /// the cooldown is trivially satisfied at the start.
    pub last_used: Option<u32>,
}

impl RemovalState {
    /// Full allowance, never used.
    #[must_use]
    pub fn new(allowance: u32) -> Self {
        Self {
            remaining: allowance,
            last_used: None,
        }
    }

    /// Whether the per-player cooldown has elapsed at `turn`.
    #[must_use]
    pub fn cooldown_over(&self, turn: u32, interval: u32) -> bool {
        self.next_usable_turn(interval).map_or(true, |t| t <= turn)
    }

    /// First turn at which the cooldown allows another use, `None` when
    /// it never started.
    #[must_use]
    pub fn next_usable_turn(&self, interval: u32) -> Option<u32> {
        self.last_used.map(|t| t + interval)
    }

    /// Consume one use at `turn`.
    pub fn record_use(&mut self, turn: u32) {
        debug_assert!(self.remaining > 0, "removal used with no uses left");
        self.remaining -= 1;
        self.last_used = Some(turn);
    }
}

/// Why the removal control is (un)available right now. Drives both the
/// eligibility gate and the control label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalAvailability {
    /// Feature disabled for the session; the control is hidden.
    Disabled,
    /// Usable now.
    Ready { remaining: u32 },
    /// The automated opponent owns the turn.
    CpuTurn,
    /// The session-wide unlock turn has not been reached.
    Locked { unlock_turn: u32 },
    /// The per-player cooldown is still running.
    CoolingDown { next_turn: u32 },
    /// No uses left for this side.
    Exhausted,
}

impl RemovalAvailability {
    /// Whether `execute` would be allowed.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, RemovalAvailability::Ready { .. })
    }
}

/// Evaluate the removal gate for the side to move.
///
/// All four conditions must hold simultaneously: uses remain, the unlock
/// turn is reached, the cooldown has elapsed, and the turn is not owned
/// by the automated opponent. Reported in that precedence order when
/// several fail, matching the control labels.
#[must_use]
pub fn availability(config: &SessionConfig, session: &GameSession) -> RemovalAvailability {
    if !config.removal_enabled() {
        return RemovalAvailability::Disabled;
    }

    let player = session.current_player;
    let state = session.removal[player];
    let turn = session.turn_count;

    if config.cpu_enabled && player == Player::White {
        return RemovalAvailability::CpuTurn;
    }
    if turn < config.remove_start_turn {
        return RemovalAvailability::Locked {
            unlock_turn: config.remove_start_turn,
        };
    }
    if !state.cooldown_over(turn, config.remove_interval) {
        return RemovalAvailability::CoolingDown {
            next_turn: state.next_usable_turn(config.remove_interval).unwrap_or(turn),
        };
    }
    if state.remaining == 0 {
        return RemovalAvailability::Exhausted;
    }

    RemovalAvailability::Ready {
        remaining: state.remaining,
    }
}
