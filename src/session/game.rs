//! The driving loop: board, turn, and outcome for one game at a time

use tracing::debug;

use super::config::{Mode, SessionConfig};
use crate::{
    Error, Result,
    search::best_move,
    tictactoe::{Board, Mark, Move, Outcome, Strike, evaluate_with_line},
};

/// A game in progress plus the rules for who moves.
///
/// `InProgress` is the only state that accepts moves. Wins and draws are
/// left only through [`Session::reset`].
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    turn: Mark,
    outcome: Outcome,
    strike: Option<Strike>,
    moves: Vec<Move>,
}

impl Session {
    /// Start a session with an empty board.
    ///
    /// If the automated mark opens, nothing is played yet; call
    /// [`Session::play_automated`] to let it move.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            turn: config.first_mark,
            outcome: Outcome::InProgress,
            strike: None,
            moves: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Strike tag of the winning line once the game is won
    pub fn strike(&self) -> Option<Strike> {
        self.strike
    }

    /// Moves of the current game in play order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Whether `mark` is controlled by the search in this session
    pub fn is_automated(&self, mark: Mark) -> bool {
        self.config.mode == Mode::PlayerVsBot && mark == self.config.automated_mark
    }

    /// Place the mark of the side to move on behalf of a person.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the game is decided
    /// - [`Error::NotHumanTurn`] when the automated side is to move
    /// - [`Error::InvalidPosition`] / [`Error::CellOccupied`] for bad cells
    pub fn apply_move(&mut self, position: usize) -> Result<Outcome> {
        if self.outcome.is_terminal() {
            return Err(Error::GameOver);
        }
        if self.is_automated(self.turn) {
            return Err(Error::NotHumanTurn {
                automated: self.turn,
            });
        }
        self.place(position)
    }

    /// True when the search should move next
    pub fn automated_turn_pending(&self) -> bool {
        self.outcome == Outcome::InProgress && self.is_automated(self.turn) && !self.board.is_full()
    }

    /// Let the search move if it is its turn.
    ///
    /// Returns the chosen position, or `None` when no automated move was due.
    pub fn play_automated(&mut self) -> Result<Option<usize>> {
        if !self.automated_turn_pending() {
            return Ok(None);
        }
        let Some(position) = best_move(&self.board, self.turn) else {
            return Err(Error::NoValidMoves);
        };
        self.place(position)?;
        Ok(Some(position))
    }

    /// Apply a human move and, if the automated side is due, its reply.
    ///
    /// This is the single transition a front end calls after each click.
    pub fn play(&mut self, position: usize) -> Result<Outcome> {
        self.apply_move(position)?;
        self.play_automated()?;
        Ok(self.outcome)
    }

    /// Clear the board and start a new game with the configured opener
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = self.config.first_mark;
        self.outcome = Outcome::InProgress;
        self.strike = None;
        self.moves.clear();
        debug!(first = %self.turn, "session reset");
    }

    fn place(&mut self, position: usize) -> Result<Outcome> {
        let mark = self.turn;
        self.board = self.board.place(position, mark)?;
        self.moves.push(Move { position, mark });

        let evaluation = evaluate_with_line(&self.board);
        self.outcome = evaluation.outcome;
        self.strike = evaluation.line.map(|line| line.strike);
        if self.outcome == Outcome::InProgress {
            self.turn = mark.opponent();
        }

        debug!(
            %mark,
            position,
            board = %self.board.encode(),
            outcome = ?self.outcome,
            "move applied"
        );
        Ok(self.outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
