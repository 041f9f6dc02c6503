//! The language-model proposer adapter.
//!
//! Wraps a [`ChatClient`] and turns its free-text reply into a validated
//! move or a classified failure. One chat call per proposal, no retries.
//! The adapter never mutates the position; the orchestrator decides what a
//! failure costs.

use log::warn;

use crate::core::{Move, MoveRecord};
use crate::error::ProposalError;
use crate::games::Game;

use super::chat::ChatClient;
use super::parse::parse_move;
use super::prompt::{build_prompt, PromptVariant};
use super::{validate, MoveProposer};

/// How much of a malformed reply to keep in the error payload.
const RAW_SNIPPET_LEN: usize = 120;

/// Move proposer backed by a chat capability.
pub struct LlmProposer<C: ChatClient> {
    name: String,
    client: C,
    variant: PromptVariant,
}

impl<C: ChatClient> LlmProposer<C> {
    /// Create a proposer with a display name, chat client, and prompt
    /// framing.
    pub fn new(name: impl Into<String>, client: C, variant: PromptVariant) -> Self {
        Self {
            name: name.into(),
            client,
            variant,
        }
    }

    /// The prompt framing this proposer plays under.
    #[must_use]
    pub fn variant(&self) -> PromptVariant {
        self.variant
    }
}

impl<C: ChatClient> MoveProposer for LlmProposer<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(
        &mut self,
        game: &dyn Game,
        recent: &[MoveRecord],
    ) -> Result<Move, ProposalError> {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return Err(ProposalError::NoProposal);
        }

        let prompt = build_prompt(self.variant, game, recent, &legal);
        let raw = match self.client.complete(&prompt) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("{}: chat call failed: {}", self.name, err);
                return Err(ProposalError::NoProposal);
            }
        };

        let mv = parse_move(&raw).map_err(|_| {
            warn!("{}: unparsable reply: {:?}", self.name, snippet(&raw));
            ProposalError::Malformed(snippet(&raw))
        })?;

        validate(mv, &legal).inspect_err(|_| {
            warn!("{}: proposed illegal move {}", self.name, mv);
        })
    }
}

fn snippet(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(RAW_SNIPPET_LEN) {
        Some((idx, _)) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}
