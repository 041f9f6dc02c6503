//! Move proposers: bridging untrusted policies to validated moves.
//!
//! A proposer is asked once per turn for a candidate move, given the current
//! position and a bounded recent-move window. It either returns a move
//! already validated against the current legal inventory, or classifies the
//! failure ([`ProposalError`]). What to do with a failure - skip the turn or
//! substitute a random legal move - is the orchestrator's decision, not the
//! proposer's.
//!
//! - [`llm::LlmProposer`]: the real adapter around a chat capability
//! - [`scripted::ScriptedProposer`] / [`scripted::RandomProposer`]: test
//!   drivers and baselines

pub mod chat;
pub mod llm;
mod parse;
pub mod prompt;
pub mod scripted;

use crate::core::{Move, MoveRecord};
use crate::error::ProposalError;
use crate::games::Game;

pub use chat::{ChatClient, OllamaClient};
pub use llm::LlmProposer;
pub use parse::parse_move;
pub use prompt::{build_prompt, PromptVariant};
pub use scripted::{RandomProposer, ScriptedProposer};

/// Move proposer trait.
///
/// `propose` is invoked once per turn. An `Ok` move is guaranteed to be a
/// member of the position's current legal inventory; the orchestrator applies
/// it without re-deriving legality. Proposers never mutate the position.
pub trait MoveProposer {
    /// Display name for logging.
    fn name(&self) -> &str;

    /// Propose a move for the current position.
    fn propose(
        &mut self,
        game: &dyn Game,
        recent: &[MoveRecord],
    ) -> Result<Move, ProposalError>;
}

/// Validate a parsed candidate against the legal inventory.
///
/// Well-formed but illegal pairs carry the rejected move for logging.
pub fn validate(mv: Move, legal: &[Move]) -> Result<Move, ProposalError> {
    if legal.contains(&mv) {
        Ok(mv)
    } else {
        Err(ProposalError::Illegal(mv))
    }
}
