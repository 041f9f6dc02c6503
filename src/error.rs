//! Crate error taxonomy.
//!
//! Two tiers with very different severity:
//!
//! - [`ConfigError`]: invalid match setup. Fatal, raised before any match
//!   starts.
//! - [`ProposalError`]: an untrusted proposal could not be turned into a
//!   legal move. Never aborts a match - the orchestrator counts it and
//!   applies the configured fallback policy.
//!
//! [`ChatError`] and [`ParseMoveError`] are internal to the proposer adapter
//! and surface as `ProposalError` variants before reaching the orchestrator.

use thiserror::Error;

use crate::core::Move;

/// Invalid game or match configuration.
///
/// The only error that should terminate the process before simulation
/// begins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Hanoi needs at least one disk.
    #[error("disk count must be at least 1, got {0}")]
    InvalidDiskCount(usize),

    /// Nim needs at least one heap.
    #[error("heap list must not be empty")]
    EmptyHeaps,
}

/// A proposal that could not be converted into an applied move.
///
/// Every variant is handled locally by the orchestrator's fallback policy
/// and recorded in the owning player's statistics; none of them is ever
/// silently dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProposalError {
    /// The reply contained no parsable integer pair.
    #[error("proposal could not be parsed as a move: {0:?}")]
    Malformed(String),

    /// The reply parsed cleanly but the move is not legal in the current
    /// position. Carries the rejected pair for logging.
    #[error("proposed move {0} is not legal in the current position")]
    Illegal(Move),

    /// The capability declined to answer (empty script, transport failure,
    /// timeout).
    #[error("no proposal was produced")]
    NoProposal,
}

/// Failure to extract a move from free text.
///
/// Parsing is a pure function over untrusted input; see
/// [`crate::proposer::parse_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    /// No integer pair anywhere in the text.
    #[error("no integer pair found")]
    NoIntegerPair,

    /// A pair was found but one side does not fit in a machine integer.
    #[error("integer pair out of range")]
    IntegerOverflow,
}

/// Chat transport or API failure.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP-level failure (connection, timeout, non-success status).
    #[error("chat request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The reply body did not contain message content.
    #[error("chat reply had no message content")]
    MissingContent,
}
