//! # puzzle-arena
//!
//! A turn-based arena for evaluating how well an external move-proposing
//! policy (a language model, in practice) plays two deterministic
//! combinatorial games: Tower of Hanoi and Nim.
//!
//! ## Design Principles
//!
//! 1. **Untrusted proposals**: the policy's reply is free text that may be
//!    wrong, malformed, or absent. Parsing is a pure function, legality is
//!    decided only by the game state machine, and every failure is counted
//!    before the fallback policy resolves the turn.
//!
//! 2. **Single mutation entry point**: positions change only through
//!    `Game::apply`, which is atomic - an illegal move is a no-op.
//!
//! 3. **Match-scoped ownership**: history, statistics, and RNG state belong
//!    to one match and die with it. Batches of matches share nothing
//!    mutable, so they parallelize without locking.
//!
//! ## Modules
//!
//! - `core`: player identity, the integer-pair move, per-match RNG
//! - `games`: the `Game` trait and the Hanoi/Nim state machines
//! - `history`: append-only move log and visited-position set
//! - `proposer`: the LLM adapter, tolerant parsing, prompt framings,
//!   scripted/random drivers
//! - `arena`: match configuration, the orchestrator, the batch runner
//! - `error`: configuration and proposal error taxonomy

pub mod arena;
pub mod core;
pub mod error;
pub mod games;
pub mod history;
pub mod proposer;

// Re-export commonly used types
pub use crate::core::{MatchRng, Move, MoveList, MoveRecord, PlayerId, PlayerMap};

pub use crate::games::{Game, GameKind, HanoiState, NimState};

pub use crate::history::MatchHistory;

pub use crate::proposer::{
    build_prompt, parse_move, ChatClient, LlmProposer, MoveProposer, OllamaClient, PromptVariant,
    RandomProposer, ScriptedProposer,
};

pub use crate::arena::{
    BenchRunner, FallbackPolicy, GameSetup, MatchConfig, MatchOutcome, MatchRecord, MatchRunner,
    MatchStatus, PlayerStats,
};

pub use crate::error::{ChatError, ConfigError, ParseMoveError, ProposalError};
