//! Match configuration.
//!
//! [`GameSetup`] validates a game configuration and builds the starting
//! position; [`MatchConfig`] carries the orchestration knobs. Both are plain
//! data with builder-style `with_*` methods.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::ConfigError;
use crate::games::{Game, GameKind, HanoiState, NimState};

/// What to do when a turn produces no validated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Skip the turn entirely (Hanoi default).
    SkipTurn,
    /// Substitute a uniformly-chosen legal move (Nim default).
    RandomLegal,
}

/// Game selection plus its starting configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameSetup {
    /// Tower of Hanoi with the given disk count.
    Hanoi { disks: usize },
    /// Nim with an explicit heap list.
    Nim { heaps: Vec<usize> },
}

impl GameSetup {
    /// Which game this setup builds.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            GameSetup::Hanoi { .. } => GameKind::Hanoi,
            GameSetup::Nim { .. } => GameKind::Nim,
        }
    }

    /// The reference fallback policy for this game.
    #[must_use]
    pub fn default_fallback(&self) -> FallbackPolicy {
        match self {
            GameSetup::Hanoi { .. } => FallbackPolicy::SkipTurn,
            GameSetup::Nim { .. } => FallbackPolicy::RandomLegal,
        }
    }

    /// Build a fresh starting position.
    ///
    /// Configuration errors are fatal and raised here, before any match
    /// starts.
    pub fn build(&self) -> Result<Box<dyn Game>, ConfigError> {
        match self {
            GameSetup::Hanoi { disks } => Ok(Box::new(HanoiState::new(*disks)?)),
            GameSetup::Nim { heaps } => Ok(Box::new(NimState::new(heaps.clone())?)),
        }
    }
}

/// Orchestration knobs for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum number of turns before the match is declared exhausted.
    pub turn_cap: u32,

    /// Fallback policy when a turn produces no validated move.
    pub fallback: FallbackPolicy,

    /// Which player moves first.
    pub first_player: PlayerId,

    /// Size of the recent-move window passed to proposers.
    pub recent_window: usize,

    /// Seed for fallback sampling.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            turn_cap: 20,
            fallback: FallbackPolicy::SkipTurn,
            first_player: PlayerId::new(0),
            recent_window: 5,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Default configuration with the game's reference fallback policy.
    #[must_use]
    pub fn for_setup(setup: &GameSetup) -> Self {
        Self::default().with_fallback(setup.default_fallback())
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_turn_cap(mut self, cap: u32) -> Self {
        self.turn_cap = cap;
        self
    }

    /// Set the fallback policy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the first player.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the recent-window size.
    #[must_use]
    pub fn with_recent_window(mut self, window: usize) -> Self {
        self.recent_window = window;
        self
    }

    /// Set the fallback-sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();

        assert_eq!(config.turn_cap, 20);
        assert_eq!(config.fallback, FallbackPolicy::SkipTurn);
        assert_eq!(config.first_player, PlayerId::new(0));
        assert_eq!(config.recent_window, 5);
    }

    #[test]
    fn test_builders() {
        let config = MatchConfig::default()
            .with_turn_cap(50)
            .with_fallback(FallbackPolicy::RandomLegal)
            .with_first_player(PlayerId::new(1))
            .with_recent_window(8)
            .with_seed(99);

        assert_eq!(config.turn_cap, 50);
        assert_eq!(config.fallback, FallbackPolicy::RandomLegal);
        assert_eq!(config.first_player, PlayerId::new(1));
        assert_eq!(config.recent_window, 8);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_setup_defaults() {
        let hanoi = GameSetup::Hanoi { disks: 3 };
        let nim = GameSetup::Nim { heaps: vec![3, 4, 5] };

        assert_eq!(hanoi.kind(), GameKind::Hanoi);
        assert_eq!(hanoi.default_fallback(), FallbackPolicy::SkipTurn);
        assert_eq!(nim.kind(), GameKind::Nim);
        assert_eq!(nim.default_fallback(), FallbackPolicy::RandomLegal);

        assert_eq!(
            MatchConfig::for_setup(&nim).fallback,
            FallbackPolicy::RandomLegal
        );
    }

    #[test]
    fn test_setup_build_validates() {
        assert!(GameSetup::Hanoi { disks: 3 }.build().is_ok());
        assert_eq!(
            GameSetup::Hanoi { disks: 0 }.build().err(),
            Some(ConfigError::InvalidDiskCount(0))
        );
        assert_eq!(
            GameSetup::Nim { heaps: vec![] }.build().err(),
            Some(ConfigError::EmptyHeaps)
        );
    }
}
