//! Exhaustive minimax search for the automated side
//!
//! Scores are always taken from the automated mark's point of view: the
//! automated side maximises, its opponent minimises. There is no pruning and
//! no depth limit; nine cells bound the recursion to nine plies.
//!
//! Children are built by copying the 9-cell board, so no frame ever has to
//! restore state on the way out.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::tictactoe::{Board, Mark, Outcome, evaluate};

/// Score of a board won by the automated side
pub const WIN_SCORE: i32 = 10;
/// Score of a board won by the opposing side
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn board
pub const DRAW_SCORE: i32 = 0;

/// A candidate move and the minimax score it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub position: usize,
    pub score: i32,
}

/// Score a terminal outcome for the automated mark, `None` while in progress
pub fn terminal_score(outcome: Outcome, automated: Mark) -> Option<i32> {
    match outcome {
        Outcome::Win(mark) if mark == automated => Some(WIN_SCORE),
        Outcome::Win(_) => Some(LOSS_SCORE),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::InProgress => None,
    }
}

/// Minimax value of `board` for the automated mark.
///
/// `maximizing` is true when the automated mark moves next. `depth` counts
/// plies below the caller and does not influence the score.
pub fn minimax(board: &Board, depth: u32, maximizing: bool, automated: Mark) -> i32 {
    if let Some(score) = terminal_score(evaluate(board), automated) {
        return score;
    }

    let (mover, mut best) = if maximizing {
        (automated, i32::MIN)
    } else {
        (automated.opponent(), i32::MAX)
    };

    for pos in (0..9).filter(|&pos| board.is_empty(pos)) {
        let child = board.with_mark(pos, mover);
        let score = minimax(&child, depth + 1, !maximizing, automated);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Score every empty cell for the automated mark, in ascending index order.
///
/// Each score is the minimax value after the automated mark is placed there
/// and the opponent replies optimally.
pub fn score_moves(board: &Board, automated: Mark) -> Vec<ScoredMove> {
    board
        .empty_positions()
        .into_iter()
        .map(|position| {
            let child = board.with_mark(position, automated);
            let score = minimax(&child, 0, false, automated);
            trace!(position, score, "scored candidate");
            ScoredMove { position, score }
        })
        .collect()
}

/// Optimal move for the automated mark, or `None` on a full board.
///
/// Among equally scored moves the lowest index wins: the best move is only
/// replaced by a strictly higher score. This makes the result a pure
/// function of the board.
///
/// Callers are expected to check [`evaluate`] first; on a board that is
/// already decided the result carries no meaning.
pub fn best_move(board: &Board, automated: Mark) -> Option<usize> {
    let mut best: Option<ScoredMove> = None;

    for candidate in score_moves(board, automated) {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }

    if let Some(chosen) = best {
        debug!(
            board = %board.encode(),
            mark = %automated,
            position = chosen.position,
            score = chosen.score,
            "selected move"
        );
    }
    best.map(|chosen| chosen.position)
}
