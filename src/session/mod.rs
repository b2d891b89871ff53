//! Game sessions: the state machine a front end drives.
//!
//! The engine functions in [`crate::tictactoe`] and [`crate::search`] are
//! pure; a [`Session`] owns the mutable parts (board, turn, outcome) and
//! decides when the search is consulted.

pub mod config;
pub mod game;

pub use config::{MAX_BOT_DELAY_MS, Mode, SessionConfig};
pub use game::Session;
