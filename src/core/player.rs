//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Exactly two sides exist: Black and White. Black always moves first.
//!
//! ## PlayerPair
//!
//! Per-player data storage with `Index`/`IndexMut` access, used for the
//! removal counters and anything else tracked per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides. Black always starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Both players, Black first.
    #[must_use]
    pub const fn both() -> [Player; 2] {
        [Player::Black, Player::White]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// One value per player, indexable by `Player`.
///
/// ## Example
///
/// ```
/// use reversi_rules::core::{Player, PlayerPair};
///
/// let mut uses: PlayerPair<u32> = PlayerPair::with_value(3);
/// uses[Player::Black] -= 1;
/// assert_eq!(uses[Player::Black], 2);
/// assert_eq!(uses[Player::White], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    black: T,
    white: T,
}

impl<T> PlayerPair<T> {
    /// Create from a factory receiving each `Player`.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            black: factory(Player::Black),
            white: factory(Player::White),
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            white: value,
        }
    }

    /// Get a reference to one player's entry.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Get a mutable reference to one player's entry.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Iterate over (Player, &T) pairs, Black first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::Black, &self.black), (Player::White, &self.white)].into_iter()
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::Black), "Black");
        assert_eq!(format!("{}", Player::White), "White");
    }

    #[test]
    fn test_pair_new() {
        let pair = PlayerPair::new(|p| match p {
            Player::Black => 1,
            Player::White => 2,
        });
        assert_eq!(pair[Player::Black], 1);
        assert_eq!(pair[Player::White], 2);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair = PlayerPair::with_value(0u32);
        pair[Player::White] = 7;
        assert_eq!(pair[Player::Black], 0);
        assert_eq!(pair[Player::White], 7);
    }

    #[test]
    fn test_pair_iter_order() {
        let pair = PlayerPair::new(|p| p);
        let entries: Vec<_> = pair.iter().map(|(p, _)| p).collect();
        assert_eq!(entries, vec![Player::Black, Player::White]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair: PlayerPair<u32> = PlayerPair::with_value(5);
        let json = serde_json::to_string(&pair).unwrap();
        let back: PlayerPair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, back);
    }
}
