//! Move representation: a bare integer pair.
//!
//! The engine never interprets the pair itself - the game variant does.
//! For Hanoi the pair is `(source peg, destination peg)`; for Nim it is
//! `(heap index, count removed)`. Keeping the type uniform lets the proposer
//! adapter parse and validate replies without knowing which game is being
//! played.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// A candidate or applied move: an ordered pair of non-negative integers.
///
/// Semantics depend on the game variant; legality is always decided by
/// membership in the current [`legal_moves`](crate::games::Game::legal_moves)
/// inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(pub usize, pub usize);

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Legal-move inventory.
///
/// SmallVec keeps the common case off the heap: Hanoi never has more than 6
/// legal moves, and the Nim configurations used here stay small. Enumeration
/// cost for Nim is O(total heap size) and grows with larger heaps.
pub type MoveList = SmallVec<[Move; 8]>;

/// An applied move with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made this move.
    pub player: PlayerId,

    /// The move made.
    pub mv: Move,

    /// Turn index when the move was made (0-based).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move(0, 2).to_string(), "(0, 2)");
        assert_eq!(Move(1, 10).to_string(), "(1, 10)");
    }

    #[test]
    fn test_move_equality_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |m: &Move| {
            let mut h = DefaultHasher::new();
            m.hash(&mut h);
            h.finish()
        };

        assert_eq!(Move(1, 2), Move(1, 2));
        assert_ne!(Move(1, 2), Move(2, 1));
        assert_eq!(hash(&Move(1, 2)), hash(&Move(1, 2)));
    }

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(PlayerId::new(1), Move(0, 2), 4);

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.mv, Move(0, 2));
        assert_eq!(record.turn, 4);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move(2, 1);
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();

        assert_eq!(mv, back);
    }
}
