//! The turn/pass/endgame state machine.
//!
//! `TurnController` exclusively owns the live `GameSession` and drives
//! every mutation: placements, flips, mine explosions, passes, random
//! removals, undo, and the heuristic opponent. Collaborators call in,
//! read a `ViewState` back out, and feed elapsed time to `advance`.
//!
//! ## Phases
//!
//! ```text
//! AwaitingMove --submit_move--> Resolving --(mine delay)--+
//!       ^                          |                      |
//!       |                      (no mine)                  v
//!       +------ Switching <-------------------------------+
//!       |        |      \
//!       |   (stuck,pass) (stuck,no pass)
//!       |        v            v
//!       +---- Passing      GameOver
//!       |        \--(both stuck)--^
//!       +-- ThinkingCpu --(cpu delay)--> submit path
//! ```
//!
//! ## Timing
//!
//! The three perceptual pauses (explosion flash, pass notice, CPU
//! "thinking") are a virtual-clock command queue: at most one timed
//! effect is pending, and `advance(ms)` resumes it once enough time has
//! been supplied, chaining into follow-up effects within the same call.
//! Tests advance time deterministically; a UI feeds wall-clock deltas.
//! No mutating entry point re-enters while an effect is pending.
//!
//! ## Errors
//!
//! Rule violations (occupied cell, non-flipping cell, undo with empty
//! history, ineligible removal, input during the opponent's turn) are
//! silent no-ops returning `false`, never errors. The only panics are
//! debug assertions on out-of-bounds coordinates, which are caller
//! contract violations.

pub mod view;

use tracing::{debug, trace};

use crate::ai::choose_move;
use crate::board::DiscCount;
use crate::core::{Coord, GameRng, Player, SessionConfig};
use crate::rules::{flippable_discs, has_move, valid_moves};
use crate::session::{availability, GameSession, History};

pub use view::{ControlState, ViewState};

/// Pause before a triggered mine clears its neighborhood.
pub const EXPLOSION_DELAY_MS: u64 = 1000;
/// Pause while the pass notice is shown before the forced skip.
pub const PASS_DELAY_MS: u64 = 1000;
/// Pause before the automated opponent commits its move.
pub const CPU_DELAY_MS: u64 = 600;

/// Where the state machine currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the side to move.
    AwaitingMove,
    /// A placement landed on a mine; the explosion is pending.
    Resolving,
    /// Transient: the turn is being handed over.
    Switching,
    /// The side to move is stuck; the pass notice is showing.
    Passing,
    /// The automated opponent owns the turn.
    ThinkingCpu,
    /// Terminal. No further moves are accepted.
    GameOver,
}

/// Timed effect waiting on the virtual clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Effect {
    /// Clear the 3×3 neighborhood, then hand the turn over.
    Explosion { center: Coord },
    /// Give the turn back to the other side after a pass.
    PassBack,
    /// Let the automated opponent commit its move.
    CpuMove,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    effect: Effect,
    remaining_ms: u64,
}

/// Transient notice for the message line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A side had no legal move and passes.
    Pass(Player),
    /// A mine went off.
    Explosion,
    /// A random disc was removed.
    Removed,
    /// A move (or move pair) was taken back.
    Undone,
    /// The session ended.
    GameOver(GameOutcome),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Pass(player) => write!(f, "{player} has no move and passes."),
            Notice::Explosion => write!(f, "Boom! A mine went off!"),
            Notice::Removed => write!(f, "A random disc was removed!"),
            Notice::Undone => write!(f, "Move taken back."),
            Notice::GameOver(GameOutcome::Winner(player)) => {
                write!(f, "Game over! {player} wins!")
            }
            Notice::GameOver(GameOutcome::Draw) => write!(f, "Game over! It's a draw."),
        }
    }
}

/// Result of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Strict disc majority.
    Winner(Player),
    /// Equal counts.
    Draw,
}

impl GameOutcome {
    /// Derive the outcome from final disc counts.
    #[must_use]
    pub fn from_counts(counts: DiscCount) -> Self {
        match counts.leader() {
            Some(player) => GameOutcome::Winner(player),
            None => GameOutcome::Draw,
        }
    }

    /// Whether `player` won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        matches!(self, GameOutcome::Winner(p) if p == player)
    }
}

/// The state machine. Owns the session, its history, and the RNG.
#[derive(Clone, Debug)]
pub struct TurnController {
    config: SessionConfig,
    session: GameSession,
    history: History,
    rng: GameRng,
    phase: Phase,
    timer: Option<Timer>,
    notice: Option<Notice>,
}

impl TurnController {
    /// Start a fresh session. Black moves first, so even with the CPU
    /// opponent enabled the controller starts awaiting human input.
    #[must_use]
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let session = GameSession::new(&config, &mut rng);
        debug!(seed, ?config, "session started");

        Self {
            config,
            session,
            history: History::new(),
            rng,
            phase: Phase::AwaitingMove,
            timer: None,
            notice: None,
        }
    }

    /// Reconstitute a controller around an existing session, e.g. a test
    /// fixture or a position built elsewhere. The side to move is taken
    /// from the session; a stuck side or a CPU turn is settled exactly
    /// as after a hand-over.
    #[must_use]
    pub fn resume(config: SessionConfig, session: GameSession, seed: u64) -> Self {
        let mut controller = Self {
            config,
            session,
            history: History::new(),
            rng: GameRng::new(seed),
            phase: Phase::AwaitingMove,
            timer: None,
            notice: None,
        };
        controller.settle_turn();
        controller
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live session (read-only).
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Active transient notice.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Final outcome, once the session has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_over()
            .then(|| GameOutcome::from_counts(self.session.board.count_discs()))
    }

    /// Snapshots held for undo.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Whether a timed effect is waiting on the virtual clock.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.timer.is_none()
    }

    /// Milliseconds until the pending effect fires, if any.
    #[must_use]
    pub fn pending_delay_ms(&self) -> Option<u64> {
        self.timer.map(|t| t.remaining_ms)
    }

    /// Assemble the render collaborator's frame.
    #[must_use]
    pub fn view(&self) -> ViewState {
        let actionable = self.phase == Phase::AwaitingMove && self.is_idle();
        let undo_usable = self.config.undo_enabled
            && actionable
            && !self.history.is_empty()
            && !self.is_cpu_turn();

        ViewState {
            board: self.session.board,
            legal_moves: valid_moves(&self.session.board, self.session.current_player),
            current_player: self.session.current_player,
            turn_count: self.session.turn_count,
            counts: self.session.board.count_discs(),
            notice: self.notice.map(|n| n.to_string()),
            remove_control: view::removal_control(
                availability(&self.config, &self.session),
                self.session.current_player,
                actionable,
            ),
            undo_control: view::undo_control(self.config.undo_enabled, undo_usable),
        }
    }

    // === Operations ===

    /// Submit a move for the side to move.
    ///
    /// Silent no-op (`false`) outside `AwaitingMove`, while an effect is
    /// pending, during the opponent's turn, and for any cell that would
    /// flip nothing.
    pub fn submit_move(&mut self, coord: Coord) -> bool {
        if self.phase != Phase::AwaitingMove || !self.is_idle() {
            trace!(%coord, phase = ?self.phase, "move rejected: not awaiting input");
            return false;
        }
        if self.is_cpu_turn() {
            trace!(%coord, "move rejected: opponent's turn");
            return false;
        }
        self.place_disc(coord)
    }

    /// Advance the virtual clock, firing pending effects as their
    /// delays elapse. Effects chain: one call with enough time drives an
    /// explosion into a pass into a CPU move.
    pub fn advance(&mut self, mut elapsed_ms: u64) {
        while let Some(timer) = self.timer.as_mut() {
            if elapsed_ms < timer.remaining_ms {
                timer.remaining_ms -= elapsed_ms;
                return;
            }
            elapsed_ms -= timer.remaining_ms;
            let effect = timer.effect;
            self.timer = None;
            self.fire(effect);
        }
    }

    /// Take back the last move, or with the CPU opponent enabled the
    /// last human move together with the reply. Silent no-op when undo is
    /// disabled, history is empty, an effect is pending, or it is the
    /// opponent's turn.
    pub fn undo(&mut self) -> bool {
        if !self.config.undo_enabled || !self.is_idle() {
            return false;
        }
        if !matches!(self.phase, Phase::AwaitingMove | Phase::GameOver) {
            return false;
        }
        if self.is_cpu_turn() {
            return false;
        }

        let steps = if self.config.cpu_enabled { 2 } else { 1 };
        let Some(restored) = self.history.rewind(steps) else {
            return false;
        };

        debug!(steps, turn = restored.turn_count, "undo");
        self.session = restored;
        self.phase = Phase::AwaitingMove;
        self.notice = Some(Notice::Undone);
        true
    }

    /// Remove one uniformly random disc for the side to move. Consumes
    /// no turn. Silent no-op unless every eligibility condition holds:
    /// uses remain, the unlock turn is reached, the cooldown has
    /// elapsed, and it is not the opponent's turn.
    pub fn remove_random(&mut self) -> bool {
        if self.phase != Phase::AwaitingMove || !self.is_idle() {
            return false;
        }
        if !availability(&self.config, &self.session).is_ready() {
            return false;
        }

        let occupied = self.session.board.occupied_cells();
        let Some(&target) = self.rng.choose(&occupied) else {
            return false;
        };

        self.history.snapshot(&self.session);

        let player = self.session.current_player;
        let turn = self.session.turn_count;
        self.session.board.set(target, crate::board::CellState::Empty);
        self.session.removal[player].record_use(turn);
        self.notice = Some(Notice::Removed);
        debug!(%player, %target, turn, "random disc removed");
        true
    }

    // === Internals ===

    fn is_cpu_turn(&self) -> bool {
        self.config.cpu_enabled && self.session.current_player == Player::White
    }

    /// Shared placement path for human and CPU moves.
    fn place_disc(&mut self, coord: Coord) -> bool {
        let player = self.session.current_player;
        let flips = flippable_discs(&self.session.board, coord, player);
        if flips.is_empty() {
            trace!(%coord, %player, "move rejected: flips nothing");
            return false;
        }

        self.history.snapshot(&self.session);

        self.session.board.place(coord, player);
        for &flipped in &flips {
            self.session.board.flip(flipped, player);
        }
        self.session.turn_count += 1;
        debug!(%player, %coord, flips = flips.len(), turn = self.session.turn_count, "disc placed");

        if self.config.mine_mode && self.session.mines.contains(coord) {
            // Explosion resolves after the flips, erasing the placed
            // disc and any freshly flipped neighbors along with the rest
            // of the neighborhood.
            self.notice = Some(Notice::Explosion);
            self.phase = Phase::Resolving;
            self.timer = Some(Timer {
                effect: Effect::Explosion { center: coord },
                remaining_ms: EXPLOSION_DELAY_MS,
            });
            debug!(%coord, "mine triggered");
            return true;
        }

        self.switch_turn();
        true
    }

    /// Hand the turn to the other side and settle it.
    fn switch_turn(&mut self) {
        self.phase = Phase::Switching;
        self.session.current_player = self.session.current_player.opponent();
        self.settle_turn();
    }

    /// Decide what the side to move does: play, think, pass, or end.
    fn settle_turn(&mut self) {
        let player = self.session.current_player;

        if has_move(&self.session.board, player) {
            self.notice = None;
            self.dispatch();
        } else if self.config.pass_enabled {
            debug!(%player, "no legal move, passing");
            self.notice = Some(Notice::Pass(player));
            self.phase = Phase::Passing;
            self.timer = Some(Timer {
                effect: Effect::PassBack,
                remaining_ms: PASS_DELAY_MS,
            });
        } else {
            self.finish_game();
        }
    }

    /// Route a playable turn to the human or the CPU.
    fn dispatch(&mut self) {
        if self.is_cpu_turn() {
            self.phase = Phase::ThinkingCpu;
            self.timer = Some(Timer {
                effect: Effect::CpuMove,
                remaining_ms: CPU_DELAY_MS,
            });
        } else {
            self.phase = Phase::AwaitingMove;
        }
    }

    fn finish_game(&mut self) {
        self.phase = Phase::GameOver;
        self.timer = None;
        let outcome = GameOutcome::from_counts(self.session.board.count_discs());
        self.notice = Some(Notice::GameOver(outcome));
        debug!(?outcome, "game over");
    }

    fn fire(&mut self, effect: Effect) {
        match effect {
            Effect::Explosion { center } => {
                self.session.board.clear_neighborhood(center);
                self.session.mines.clear(center);
                debug!(%center, "explosion cleared neighborhood");
                self.switch_turn();
            }
            Effect::PassBack => {
                // The stuck side skips; the turn returns to the mover.
                self.session.current_player = self.session.current_player.opponent();
                if has_move(&self.session.board, self.session.current_player) {
                    // The pass notice stays visible until the next move.
                    self.dispatch();
                } else {
                    // Both sides stuck: straight to game over, no second
                    // pass announcement.
                    self.finish_game();
                }
            }
            Effect::CpuMove => {
                let choice = choose_move(
                    &self.session.board,
                    self.session.current_player,
                    self.config.pass_enabled,
                );
                match choice {
                    Some(coord) => {
                        debug!(%coord, "cpu move");
                        self.place_disc(coord);
                    }
                    // Unreachable: the turn was dispatched with moves
                    // available and nothing mutated the board since.
                    None => self.switch_turn(),
                }
            }
        }
    }
}
