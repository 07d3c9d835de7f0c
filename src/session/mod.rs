//! Session aggregate, undo history, and the removal house rule.

pub mod history;
pub mod removal;
pub mod state;

pub use history::History;
pub use removal::{availability, RemovalAvailability, RemovalState};
pub use state::{GameSession, INITIAL_TURN_COUNT};
