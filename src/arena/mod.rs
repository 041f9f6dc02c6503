//! Match orchestration: configuration, the per-match runner, and the batch
//! benchmark runner.

mod bench;
mod config;
mod runner;

pub use bench::{BenchRunner, MatchRecord};
pub use config::{FallbackPolicy, GameSetup, MatchConfig};
pub use runner::{MatchOutcome, MatchRunner, MatchStatus, PlayerStats};
