//! Noughts and crosses board model and outcome evaluation

pub mod board;
pub mod evaluator;
pub mod lines;

pub use board::{Board, Cell, Mark, Move};
pub use evaluator::{Evaluation, Outcome, evaluate, evaluate_with_line};
pub use lines::{Line, LineAnalyzer, Strike, WINNING_LINES};
