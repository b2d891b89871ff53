//! Board outcome evaluation
//!
//! Outcomes are never stored: they are recomputed from the cells every time.
//! The search calls [`evaluate`] once per node, so it stays a single pass
//! over [`WINNING_LINES`](super::WINNING_LINES) with no allocation.

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Mark},
    lines::{Line, LineAnalyzer},
};

/// Classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    /// True for wins and draws
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Outcome plus the line that decided it, for renderers that draw a strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub line: Option<Line>,
}

/// Classify a board.
///
/// The first complete line in scan order decides the winner. Any cell
/// combination is accepted, including boards no legal game can reach.
pub fn evaluate(board: &Board) -> Outcome {
    evaluate_with_line(board).outcome
}

/// Classify a board and report which line completed, if any.
pub fn evaluate_with_line(board: &Board) -> Evaluation {
    if let Some((line, mark)) = LineAnalyzer::completed_line(&board.cells) {
        return Evaluation {
            outcome: Outcome::Win(mark),
            line: Some(line),
        };
    }

    let outcome = if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    Evaluation {
        outcome,
        line: None,
    }
}

impl Board {
    /// Shorthand for [`evaluate`]
    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        self.outcome().winner()
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Positions that complete a line for `mark` if played next
    pub fn winning_moves(&self, mark: Mark) -> Vec<usize> {
        LineAnalyzer::winning_moves(&self.cells, mark)
    }
}
