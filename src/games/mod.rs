//! Game state machines.
//!
//! Games implement [`Game`] to define their rules:
//! - What moves are legal
//! - How a move modifies the position
//! - When the position is terminal
//!
//! The two supported variants live in [`hanoi`] and [`nim`]. The arena only
//! ever talks to `dyn Game`, so the orchestrator, history, and proposer
//! adapter are shared between the two.

pub mod hanoi;
pub mod nim;

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveList};

pub use hanoi::HanoiState;
pub use nim::NimState;

/// Which game variant a position belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// Tower of Hanoi: moves are `(source peg, destination peg)`.
    Hanoi,
    /// Nim: moves are `(heap index, count removed)`.
    Nim,
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameKind::Hanoi => write!(f, "hanoi"),
            GameKind::Nim => write!(f, "nim"),
        }
    }
}

/// Game state machine trait.
///
/// ## Contract
///
/// - `legal_moves` is deterministic and ordered (required for reproducible
///   testing, not for fairness).
/// - `apply` is the single mutation entry point and is atomic: an illegal
///   move returns `false` and leaves the position untouched.
/// - `fingerprint` is a canonical structural encoding, sufficient to
///   reconstruct the position and usable as a visited-set key.
/// - `render` is the human-facing drawing sent to the proposer; it carries
///   no legality information the engine relies on.
pub trait Game {
    /// Which variant this position belongs to.
    fn kind(&self) -> GameKind;

    /// Enumerate every legal move in deterministic ascending order.
    fn legal_moves(&self) -> MoveList;

    /// Apply a move. Returns `false` (with no mutation) if the move is not
    /// currently legal.
    fn apply(&mut self, mv: Move) -> bool;

    /// Check whether the position is terminal.
    fn is_terminal(&self) -> bool;

    /// Canonical structural snapshot of the position.
    fn fingerprint(&self) -> String;

    /// Visual rendering for prompts and verbose output.
    fn render(&self) -> String;
}
