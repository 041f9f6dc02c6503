//! The match orchestrator.
//!
//! Alternates two proposers against one game state machine:
//!
//! 1. Ask the current player's proposer for a move, passing the position
//!    and the recent-move window.
//! 2. A validated move is applied and recorded in history.
//! 3. Any proposal failure increments the matching counter and resolves
//!    through the configured fallback policy; the fallback event is counted
//!    separately from the malformed/illegal classification.
//! 4. Terminal check after every turn; the winner is the player whose turn
//!    produced the terminal position (fallback moves included).
//! 5. Hitting the turn cap without a terminal position exhausts the match.
//!
//! Everything here is single-threaded and turn-sequential. Matches share no
//! mutable state, so callers may run many runners in parallel, each owning
//! its own position, history, and statistics.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{MatchRng, MoveRecord, PlayerId, PlayerMap};
use crate::error::ProposalError;
use crate::games::Game;
use crate::history::MatchHistory;
use crate::proposer::MoveProposer;

use super::config::{FallbackPolicy, MatchConfig};

/// Orchestrator state, advanced once per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    /// The match is still being played.
    InProgress,
    /// A terminal position was reached; the given player produced it.
    Terminal(PlayerId),
    /// The turn cap was reached without a terminal position.
    Exhausted,
}

impl MatchStatus {
    /// The winning player, if the match reached a terminal position.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            MatchStatus::Terminal(player) => Some(player),
            _ => None,
        }
    }
}

/// Per-player proposal bookkeeping for one match.
///
/// Owned by the match: created fresh at match start, never shared across
/// matches. These counters are the primary observability signal for
/// evaluating proposer quality, so no proposal failure goes uncounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Proposals rejected as unparsable.
    pub malformed: u32,

    /// Proposals parsed cleanly but rejected as illegal.
    pub illegal: u32,

    /// Turns resolved through the fallback policy.
    pub fallback: u32,
}

/// Result of a completed match. Immutable once the loop ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The winner, or `None` for an exhausted match (or a position that was
    /// terminal before any turn).
    pub winner: Option<PlayerId>,

    /// Number of turns consumed, skipped turns included.
    pub turns: u32,

    /// Whether a terminal position was reached.
    pub terminal_reached: bool,

    /// Per-player proposal statistics.
    pub stats: PlayerMap<PlayerStats>,
}

/// Runs one match between two proposers.
pub struct MatchRunner {
    config: MatchConfig,
    rng: MatchRng,
}

impl MatchRunner {
    /// Create a runner; fallback sampling is seeded from the config.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let rng = MatchRng::new(config.seed);
        Self { config, rng }
    }

    /// The configuration this runner was built with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play one match to completion.
    ///
    /// `p0` and `p1` are the proposers for `PlayerId(0)` and `PlayerId(1)`;
    /// turn order alternates strictly, starting with the configured first
    /// player.
    pub fn run(
        &mut self,
        game: &mut dyn Game,
        p0: &mut dyn MoveProposer,
        p1: &mut dyn MoveProposer,
    ) -> MatchOutcome {
        let mut history = MatchHistory::new();
        let mut stats: PlayerMap<PlayerStats> = PlayerMap::with_default(2);
        let mut status = MatchStatus::InProgress;
        let mut turn: u32 = 0;

        // A position that is terminal before any turn has no winner.
        if game.is_terminal() {
            return MatchOutcome {
                winner: None,
                turns: 0,
                terminal_reached: true,
                stats,
            };
        }

        while turn < self.config.turn_cap {
            let player = self.player_for_turn(turn);
            let proposer: &mut dyn MoveProposer = if player.index() == 0 {
                &mut *p0
            } else {
                &mut *p1
            };

            let recent = history.recent(self.config.recent_window);
            match proposer.propose(game, &recent) {
                Ok(mv) => {
                    if game.apply(mv) {
                        debug!("turn {}: {} plays {}", turn, proposer.name(), mv);
                        history.record(MoveRecord::new(player, mv, turn), game.fingerprint());
                    } else {
                        // The proposer contract promises a validated move;
                        // count a breach as illegal and fall back anyway.
                        warn!(
                            "turn {}: {} returned stale move {}",
                            turn,
                            proposer.name(),
                            mv
                        );
                        stats[player].illegal += 1;
                        self.resolve_fallback(game, player, turn, &mut history, &mut stats);
                    }
                }
                Err(err) => {
                    match &err {
                        ProposalError::Malformed(_) => stats[player].malformed += 1,
                        ProposalError::Illegal(_) => stats[player].illegal += 1,
                        ProposalError::NoProposal => {}
                    }
                    warn!("turn {}: {}: {}", turn, proposer.name(), err);
                    self.resolve_fallback(game, player, turn, &mut history, &mut stats);
                }
            }

            turn += 1;

            if game.is_terminal() {
                status = MatchStatus::Terminal(player);
                break;
            }
        }

        if status == MatchStatus::InProgress {
            status = MatchStatus::Exhausted;
        }

        let outcome = MatchOutcome {
            winner: status.winner(),
            turns: turn,
            terminal_reached: matches!(status, MatchStatus::Terminal(_)),
            stats,
        };

        match outcome.winner {
            Some(winner) => info!("match over: {} wins after {} turns", winner, outcome.turns),
            None => info!("match exhausted after {} turns", outcome.turns),
        }

        outcome
    }

    /// The player on move for a 0-based turn index.
    fn player_for_turn(&self, turn: u32) -> PlayerId {
        PlayerId::new(((self.config.first_player.index() + turn as usize) % 2) as u8)
    }

    /// Resolve a failed turn through the configured fallback policy.
    fn resolve_fallback(
        &mut self,
        game: &mut dyn Game,
        player: PlayerId,
        turn: u32,
        history: &mut MatchHistory,
        stats: &mut PlayerMap<PlayerStats>,
    ) {
        match self.config.fallback {
            FallbackPolicy::SkipTurn => {
                debug!("turn {}: {} skipped", turn, player);
            }
            FallbackPolicy::RandomLegal => {
                if let Some(mv) = self.rng.choose(&game.legal_moves()) {
                    game.apply(mv);
                    history.record(MoveRecord::new(player, mv, turn), game.fingerprint());
                    debug!("turn {}: {} falls back to {}", turn, player, mv);
                }
            }
        }
        stats[player].fallback += 1;
    }
}
