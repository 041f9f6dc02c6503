//! Tower of Hanoi state machine.
//!
//! Three pegs, disks stored bottom-to-top with strictly decreasing sizes
//! within a peg. All disks start on peg 0; the position is terminal when
//! every disk sits on peg 2.
//!
//! ## Invariants
//!
//! - Within a peg, sizes strictly decrease from bottom to top.
//! - The multiset of disk sizes across all pegs is always `{1..N}`, exactly
//!   once each.
//!
//! Both hold by construction and are preserved by [`HanoiState::apply`],
//! which rejects any move placing a larger disk on a smaller one.

use smallvec::smallvec;

use crate::core::{Move, MoveList};
use crate::error::ConfigError;

use super::{Game, GameKind};

/// The goal peg in the canonical 3-peg setup.
pub const GOAL_PEG: usize = 2;

const PEG_COUNT: usize = 3;

/// Tower of Hanoi position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HanoiState {
    num_disks: usize,
    /// Pegs bottom-to-top; `pegs[0]` starts as `[N, N-1, .., 1]`.
    pegs: [Vec<usize>; PEG_COUNT],
}

impl HanoiState {
    /// Create a starting position with `num_disks` disks on peg 0.
    ///
    /// A disk count of zero is a configuration error.
    pub fn new(num_disks: usize) -> Result<Self, ConfigError> {
        if num_disks == 0 {
            return Err(ConfigError::InvalidDiskCount(num_disks));
        }

        Ok(Self {
            num_disks,
            pegs: [(1..=num_disks).rev().collect(), Vec::new(), Vec::new()],
        })
    }

    /// Number of disks in the puzzle.
    #[must_use]
    pub fn num_disks(&self) -> usize {
        self.num_disks
    }

    /// The disks on a peg, bottom to top.
    #[must_use]
    pub fn peg(&self, index: usize) -> &[usize] {
        &self.pegs[index]
    }

    /// Whether moving the top of `src` onto `dst` is currently legal.
    fn is_legal(&self, src: usize, dst: usize) -> bool {
        if src >= PEG_COUNT || dst >= PEG_COUNT || src == dst {
            return false;
        }
        match (self.pegs[src].last(), self.pegs[dst].last()) {
            (Some(moving), Some(top)) => moving < top,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl Game for HanoiState {
    fn kind(&self) -> GameKind {
        GameKind::Hanoi
    }

    fn legal_moves(&self) -> MoveList {
        let mut moves: MoveList = smallvec![];

        // Ascending (src, dst) order for reproducibility.
        for src in 0..PEG_COUNT {
            for dst in 0..PEG_COUNT {
                if self.is_legal(src, dst) {
                    moves.push(Move(src, dst));
                }
            }
        }

        moves
    }

    fn apply(&mut self, mv: Move) -> bool {
        let Move(src, dst) = mv;
        if !self.is_legal(src, dst) {
            return false;
        }

        // is_legal guarantees src is non-empty.
        let Some(disk) = self.pegs[src].pop() else {
            return false;
        };
        self.pegs[dst].push(disk);
        true
    }

    fn is_terminal(&self) -> bool {
        self.pegs[GOAL_PEG].len() == self.num_disks
    }

    fn fingerprint(&self) -> String {
        format!("{:?}", self.pegs)
    }

    fn render(&self) -> String {
        // Widest disk is 2N-1 characters; every cell matches it.
        let peg_width = self.num_disks * 2 - 1;
        let mut out = String::new();

        // Rows from top level down; empty slots are spaces.
        for level in (0..self.num_disks).rev() {
            let mut row = Vec::with_capacity(PEG_COUNT);
            for peg in &self.pegs {
                match peg.get(level) {
                    Some(&size) => {
                        let pad = self.num_disks - size;
                        row.push(format!(
                            "{}{}{}",
                            " ".repeat(pad),
                            "=".repeat(size * 2 - 1),
                            " ".repeat(pad)
                        ));
                    }
                    None => row.push(" ".repeat(peg_width)),
                }
            }
            out.push_str(&row.join(" "));
            out.push('\n');
        }

        let total_width = (peg_width + 1) * PEG_COUNT - 1;
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        let labels: Vec<String> = (0..PEG_COUNT)
            .map(|i| format!("{:^width$}", i, width = peg_width))
            .collect();
        out.push_str(&labels.join(" "));
        out.push('\n');

        out
    }
}
