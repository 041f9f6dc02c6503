//! Prompt construction for the chat capability.
//!
//! The framing variants are data, not duplicated branching logic: every
//! variant shares one body (rules, rendered position, recent window, legal
//! inventory, answer-format instruction) and differs only in its persona
//! preamble. A variant never changes the legality contract.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveRecord};
use crate::games::{Game, GameKind};

/// Named prompt framing sent to the chat capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    /// No persona, just the rules and the request.
    Direct,
    /// Frames the model as a veteran puzzle strategist.
    Strategist,
    /// Emphasizes double-checking legality before answering.
    Cautious,
}

impl PromptVariant {
    /// All defined variants.
    pub const ALL: [PromptVariant; 3] = [
        PromptVariant::Direct,
        PromptVariant::Strategist,
        PromptVariant::Cautious,
    ];

    /// Stable name used in match records.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PromptVariant::Direct => "direct",
            PromptVariant::Strategist => "strategist",
            PromptVariant::Cautious => "cautious",
        }
    }

    fn preamble(self) -> &'static str {
        match self {
            PromptVariant::Direct => "",
            PromptVariant::Strategist => {
                "You are a veteran strategist who has solved thousands of \
                 combinatorial puzzles.\n"
            }
            PromptVariant::Cautious => {
                "You are a careful player. Before answering, double-check \
                 that your move appears in the list of legal moves.\n"
            }
        }
    }
}

impl std::fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn rules_text(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Hanoi => {
            "You are solving the Tower of Hanoi puzzle.\n\
             Your goal is to move all disks from peg 0 to peg 2, following these rules:\n\
             - Only one disk can be moved at a time.\n\
             - A larger disk may never be placed on top of a smaller disk.\n"
        }
        GameKind::Nim => "You are playing the game of Nim.\n",
    }
}

fn answer_format(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Hanoi => "Only respond with a pair like (from_peg, to_peg). Do not explain.",
        GameKind::Nim => {
            "Only respond with a pair from the list above, like (heap_index, num_removed). \
             Do not invent new moves. Do not explain."
        }
    }
}

fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    let formatted: Vec<String> = moves.into_iter().map(|m| m.to_string()).collect();
    format!("[{}]", formatted.join(", "))
}

/// Build the full prompt for one proposal call.
#[must_use]
pub fn build_prompt(
    variant: PromptVariant,
    game: &dyn Game,
    recent: &[MoveRecord],
    legal: &[Move],
) -> String {
    let kind = game.kind();
    let mut prompt = String::new();

    prompt.push_str(variant.preamble());
    prompt.push_str(rules_text(kind));

    let _ = writeln!(prompt, "\nCurrent state:\n{}", game.render());
    let _ = writeln!(
        prompt,
        "Recent moves: {}",
        format_moves(recent.iter().map(|r| r.mv))
    );
    let _ = writeln!(prompt, "Legal moves: {}", format_moves(legal.iter().copied()));

    prompt.push_str(
        "\nChoose the best next move from the list of legal moves. \
         Avoid repeating previous states or undoing recent moves.\n",
    );
    prompt.push_str(answer_format(kind));

    prompt
}
