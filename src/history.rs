//! Shared match history.
//!
//! An append-only log of applied moves plus the set of canonical position
//! fingerprints already seen. The log feeds the bounded recent-move window
//! sent to proposers; the visited set is advisory context only and never
//! blocks a move (revisiting a position is legal, merely discouraged in the
//! prompt framing).
//!
//! Created empty at match start, grows monotonically, discarded at match
//! end. Never shared between matches.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::MoveRecord;

/// Append-only move log and visited-position set for one match.
#[derive(Clone, Debug, Default)]
pub struct MatchHistory {
    moves: Vector<MoveRecord>,
    visited: FxHashSet<String>,
}

impl MatchHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied move and the fingerprint of the resulting position.
    pub fn record(&mut self, record: MoveRecord, fingerprint: String) {
        self.moves.push_back(record);
        self.visited.insert(fingerprint);
    }

    /// The `n` most recent applied moves, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<MoveRecord> {
        let skip = self.moves.len().saturating_sub(n);
        self.moves.iter().skip(skip).copied().collect()
    }

    /// Whether a position fingerprint has been seen before.
    #[must_use]
    pub fn has_seen(&self, fingerprint: &str) -> bool {
        self.visited.contains(fingerprint)
    }

    /// Number of applied moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no move has been applied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, PlayerId};

    fn record(turn: u32) -> MoveRecord {
        MoveRecord::new(PlayerId::new((turn % 2) as u8), Move(0, 1), turn)
    }

    #[test]
    fn test_empty_history() {
        let history = MatchHistory::new();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.recent(5).is_empty());
        assert!(!history.has_seen("[1, 2]"));
    }

    #[test]
    fn test_record_and_recent_window() {
        let mut history = MatchHistory::new();
        for turn in 0..8 {
            history.record(record(turn), format!("fp-{}", turn));
        }

        assert_eq!(history.len(), 8);

        let window = history.recent(3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].turn, 5);
        assert_eq!(window[2].turn, 7);
    }

    #[test]
    fn test_recent_window_larger_than_log() {
        let mut history = MatchHistory::new();
        history.record(record(0), "fp".to_string());

        assert_eq!(history.recent(5).len(), 1);
    }

    #[test]
    fn test_visited_set() {
        let mut history = MatchHistory::new();
        history.record(record(0), "[[2], [1], []]".to_string());

        assert!(history.has_seen("[[2], [1], []]"));
        assert!(!history.has_seen("[[2, 1], [], []]"));

        // Revisiting is recorded, not rejected.
        history.record(record(1), "[[2], [1], []]".to_string());
        assert_eq!(history.len(), 2);
    }
}
