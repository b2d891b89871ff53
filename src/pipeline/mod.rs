//! Match pipeline: players, observers and the runner that pits them together

pub mod match_play;
pub mod observers;
pub mod players;

pub use match_play::{MatchConfig, MatchResult, MatchRunner};
pub use observers::{MetricsObserver, ProgressObserver};
pub use players::{MinimaxPlayer, RandomPlayer, ScriptedPlayer};

pub use crate::ports::{Observer, Player};
