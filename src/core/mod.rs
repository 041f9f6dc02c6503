//! Core types shared by every other module.
//!
//! - [`PlayerId`] / [`PlayerMap`]: player identity and per-player storage
//! - [`Move`] / [`MoveRecord`] / [`MoveList`]: the uninterpreted integer-pair
//!   move and its history record
//! - [`MatchRng`]: seeded RNG for fallback sampling and baselines

mod mv;
mod player;
mod rng;

pub use mv::{Move, MoveList, MoveRecord};
pub use player::{PlayerId, PlayerMap};
pub use rng::MatchRng;
