//! Scripted and random proposers.
//!
//! [`ScriptedProposer`] drives deterministic match tests; [`RandomProposer`]
//! is the uniform-legal baseline the LLM adapter is measured against. Both
//! honor the same contract as the real adapter: an `Ok` move is validated
//! against the current legal inventory.

use std::collections::VecDeque;

use crate::core::{MatchRng, Move, MoveRecord};
use crate::error::ProposalError;
use crate::games::Game;

use super::{validate, MoveProposer};

enum Script {
    /// Play moves in order, then decline.
    Sequence(VecDeque<Move>),
    /// Propose the same move every turn.
    Repeat(Move),
}

/// Proposer that plays a fixed script.
pub struct ScriptedProposer {
    name: String,
    script: Script,
}

impl ScriptedProposer {
    /// Play `moves` in order; once exhausted, decline every call.
    ///
    /// An empty script declines from the first turn.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            script: Script::Sequence(moves.into_iter().collect()),
        }
    }

    /// Propose `mv` on every turn, legal or not.
    pub fn repeating(name: impl Into<String>, mv: Move) -> Self {
        Self {
            name: name.into(),
            script: Script::Repeat(mv),
        }
    }
}

impl MoveProposer for ScriptedProposer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(
        &mut self,
        game: &dyn Game,
        _recent: &[MoveRecord],
    ) -> Result<Move, ProposalError> {
        let mv = match &mut self.script {
            Script::Sequence(moves) => moves.pop_front().ok_or(ProposalError::NoProposal)?,
            Script::Repeat(mv) => *mv,
        };

        validate(mv, &game.legal_moves())
    }
}

/// Baseline proposer: a uniformly random legal move every turn.
pub struct RandomProposer {
    name: String,
    rng: MatchRng,
}

impl RandomProposer {
    /// Create a seeded random proposer.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: MatchRng::new(seed),
        }
    }
}

impl MoveProposer for RandomProposer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(
        &mut self,
        game: &dyn Game,
        _recent: &[MoveRecord],
    ) -> Result<Move, ProposalError> {
        self.rng
            .choose(&game.legal_moves())
            .ok_or(ProposalError::NoProposal)
    }
}
