//! Noughts and crosses engine with an exhaustive minimax opponent
//!
//! This crate provides:
//! - Board model and outcome evaluation ([`tictactoe`])
//! - Optimal move search for the automated side ([`search`])
//! - A game session state machine for front ends ([`session`])
//! - Player/observer ports and a match runner ([`ports`], [`pipeline`])
//! - A terminal front end ([`cli`])
//!
//! ```
//! use noughts::{best_move, evaluate, tictactoe::{Board, Mark, Outcome}};
//!
//! let board = Board::from_string("XX.OO....")?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(best_move(&board, Mark::X), Some(2));
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{ScoredMove, best_move, score_moves};
pub use session::{Mode, Session, SessionConfig};
pub use tictactoe::{Board, Cell, Mark, Outcome, evaluate, evaluate_with_line};
