//! Nim state machine.
//!
//! An ordered list of heaps; a move removes 1..=heap objects from one heap.
//! The position is terminal when every heap is zero. Heap counts only ever
//! decrease over a match.
//!
//! Enumerating legal moves is O(total heap size). That is fine at the scale
//! used here (small heaps) but does not stay small if the engine is reused
//! with large heaps.

use smallvec::smallvec;

use crate::core::{Move, MoveList};
use crate::error::ConfigError;

use super::{Game, GameKind};

/// Nim position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NimState {
    heaps: Vec<usize>,
}

impl NimState {
    /// Create a position from an explicit heap list.
    ///
    /// An empty list is a configuration error. Zero-valued heaps are
    /// allowed; a list of only zeros is terminal from the start.
    pub fn new(heaps: Vec<usize>) -> Result<Self, ConfigError> {
        if heaps.is_empty() {
            return Err(ConfigError::EmptyHeaps);
        }
        Ok(Self { heaps })
    }

    /// Current heap counts.
    #[must_use]
    pub fn heaps(&self) -> &[usize] {
        &self.heaps
    }
}

impl Game for NimState {
    fn kind(&self) -> GameKind {
        GameKind::Nim
    }

    fn legal_moves(&self) -> MoveList {
        let mut moves: MoveList = smallvec![];

        for (heap, &count) in self.heaps.iter().enumerate() {
            for remove in 1..=count {
                moves.push(Move(heap, remove));
            }
        }

        moves
    }

    fn apply(&mut self, mv: Move) -> bool {
        let Move(heap, count) = mv;
        match self.heaps.get_mut(heap) {
            Some(current) if count >= 1 && count <= *current => {
                *current -= count;
                true
            }
            _ => false,
        }
    }

    fn is_terminal(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    fn fingerprint(&self) -> String {
        format!("{:?}", self.heaps)
    }

    fn render(&self) -> String {
        let mut out = String::from("Current heaps:\n");
        for (i, &count) in self.heaps.iter().enumerate() {
            out.push_str(&format!("Heap {}: {} ({})\n", i, "●".repeat(count), count));
        }
        out.push_str(&"-".repeat(30));
        out.push('\n');
        out
    }
}
