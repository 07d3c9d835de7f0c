//! Snapshot stack for undo.
//!
//! One structural deep copy of the session is pushed before every
//! mutating action (a placement or a removal, never a flip). Undo pops
//! and restores; everything else on the stack is simply discarded when
//! the session ends.

use serde::{Deserialize, Serialize};

use crate::session::GameSession;

/// The undo stack.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    stack: Vec<GameSession>,
}

impl History {
    /// An empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a deep copy of the session.
    ///
    /// `GameSession` owns all of its data, so `clone` shares no mutable
    /// state with the live session.
    pub fn snapshot(&mut self, session: &GameSession) {
        self.stack.push(session.clone());
    }

    /// Pop up to `steps` entries and return the oldest popped one.
    ///
    /// Popping two steps rewinds a human move and the automated reply as
    /// one unit. Returns `None` when the stack is empty.
    #[must_use]
    pub fn rewind(&mut self, steps: usize) -> Option<GameSession> {
        let steps = steps.min(self.stack.len());
        let mut restored = None;
        for _ in 0..steps {
            restored = self.stack.pop();
        }
        restored
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no snapshots are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
