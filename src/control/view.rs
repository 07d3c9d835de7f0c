//! View-model queries for the render collaborator.
//!
//! The engine owns no widgets. After every state-changing operation a
//! collaborator asks for a `ViewState` snapshot and draws it: board,
//! legal-move highlights, score line, transient notice, and the
//! visible/enabled/label triple for each optional control.

use crate::board::{Board, DiscCount};
use crate::core::{Coord, Player};
use crate::session::RemovalAvailability;

/// One optional control (removal or undo) as the collaborator should
/// present it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// Hidden controls are not rendered at all.
    pub visible: bool,
    /// Greyed out when false.
    pub enabled: bool,
    /// Button text, including the reason while unavailable.
    pub label: String,
}

impl ControlState {
    /// A control hidden for the whole session.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            enabled: false,
            label: String::new(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Full board snapshot.
    pub board: Board,
    /// Legal moves of the side to move, for highlighting.
    pub legal_moves: Vec<Coord>,
    /// The side to move.
    pub current_player: Player,
    /// Discs placed so far, counting the initial four.
    pub turn_count: u32,
    /// Disc totals.
    pub counts: DiscCount,
    /// Transient human-readable notice, if one is active.
    pub notice: Option<String>,
    /// The random-removal control.
    pub remove_control: ControlState,
    /// The undo control.
    pub undo_control: ControlState,
}

/// Label and flags for the removal control.
///
/// `actionable` is false while a delay is pending or the session is
/// over, regardless of the eligibility gate.
#[must_use]
pub fn removal_control(
    availability: RemovalAvailability,
    player: Player,
    actionable: bool,
) -> ControlState {
    let (enabled, label) = match availability {
        RemovalAvailability::Disabled => return ControlState::hidden(),
        RemovalAvailability::Ready { remaining } => {
            (true, format!("Remove random ({player}: {remaining} left)"))
        }
        RemovalAvailability::CpuTurn => (false, "CPU thinking...".to_string()),
        RemovalAvailability::Locked { unlock_turn } => {
            (false, format!("Locked until turn {unlock_turn}"))
        }
        RemovalAvailability::CoolingDown { next_turn } => {
            (false, format!("Ready again at turn {next_turn}"))
        }
        RemovalAvailability::Exhausted => (false, "No uses left".to_string()),
    };

    ControlState {
        visible: true,
        enabled: enabled && actionable,
        label,
    }
}

/// Label and flags for the undo control.
#[must_use]
pub fn undo_control(visible: bool, enabled: bool) -> ControlState {
    if !visible {
        return ControlState::hidden();
    }
    ControlState {
        visible: true,
        enabled,
        label: "Undo".to_string(),
    }
}
