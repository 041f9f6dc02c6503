//! Batch benchmark runner.
//!
//! Runs many independent matches of one configuration and flattens each
//! outcome into a [`MatchRecord`] suitable for tabular storage. Persistence
//! and plotting are downstream consumers of the record shape; the runner
//! itself only produces the records.
//!
//! Matches are embarrassingly parallel (fresh position, history, and
//! statistics per match), but the runner stays sequential: callers that want
//! parallelism can shard the match count across independent runners.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::ConfigError;
use crate::games::GameKind;
use crate::proposer::{MoveProposer, PromptVariant};

use super::config::{GameSetup, MatchConfig};
use super::runner::{MatchOutcome, MatchRunner};

/// One flat result row per match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Game variant played.
    pub game: GameKind,

    /// Prompt framing the proposers played under.
    pub prompt_variant: String,

    /// 0-based index of the match within the batch.
    pub match_index: usize,

    /// Winning player index, if any.
    pub winner: Option<u8>,

    /// Turns consumed.
    pub turns: u32,

    /// Whether a terminal position was reached.
    pub terminal_reached: bool,

    /// Unparsable proposals per player.
    pub malformed_p0: u32,
    pub malformed_p1: u32,

    /// Well-formed but illegal proposals per player.
    pub illegal_p0: u32,
    pub illegal_p1: u32,

    /// Fallback-resolved turns per player.
    pub fallback_p0: u32,
    pub fallback_p1: u32,
}

impl MatchRecord {
    /// Flatten a match outcome into a record.
    #[must_use]
    pub fn from_outcome(
        game: GameKind,
        variant: PromptVariant,
        match_index: usize,
        outcome: &MatchOutcome,
    ) -> Self {
        let p0 = outcome.stats[PlayerId::new(0)];
        let p1 = outcome.stats[PlayerId::new(1)];

        Self {
            game,
            prompt_variant: variant.name().to_string(),
            match_index,
            winner: outcome.winner.map(|p| p.0),
            turns: outcome.turns,
            terminal_reached: outcome.terminal_reached,
            malformed_p0: p0.malformed,
            malformed_p1: p1.malformed,
            illegal_p0: p0.illegal,
            illegal_p1: p1.illegal,
            fallback_p0: p0.fallback,
            fallback_p1: p1.fallback,
        }
    }
}

/// Runs a batch of matches with one setup, configuration, and framing.
pub struct BenchRunner {
    setup: GameSetup,
    config: MatchConfig,
    variant: PromptVariant,
}

impl BenchRunner {
    /// Create a batch runner. The config's seed is the base seed; match `i`
    /// runs with `seed + i`.
    #[must_use]
    pub fn new(setup: GameSetup, config: MatchConfig, variant: PromptVariant) -> Self {
        Self {
            setup,
            config,
            variant,
        }
    }

    /// Run `count` matches, building a fresh proposer pair per match.
    ///
    /// Fails fast on an invalid game setup, before any match starts.
    pub fn run<F>(&self, count: usize, mut make_players: F) -> Result<Vec<MatchRecord>, ConfigError>
    where
        F: FnMut(usize) -> (Box<dyn MoveProposer>, Box<dyn MoveProposer>),
    {
        // Surface configuration errors even for an empty batch.
        let _ = self.setup.build()?;

        let mut records = Vec::with_capacity(count);
        for index in 0..count {
            let mut game = self.setup.build()?;
            let seed = self.config.seed.wrapping_add(index as u64);
            let mut runner = MatchRunner::new(self.config.clone().with_seed(seed));

            let (mut p0, mut p1) = make_players(index);
            let outcome = runner.run(game.as_mut(), p0.as_mut(), p1.as_mut());

            records.push(MatchRecord::from_outcome(
                self.setup.kind(),
                self.variant,
                index,
                &outcome,
            ));
        }

        Ok(records)
    }
}
