//! Observer port - hooks into repeated matches
//!
//! Observers collect data while the match runner plays games, without the
//! runner knowing about progress bars or metrics.

use crate::{
    Result,
    tictactoe::{Board, Mark, Outcome},
};

/// Observer trait for monitoring a match.
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games, agent)` - once
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - for each move
///    - `on_game_end(game_num, outcome)`
/// 3. `on_match_end()` - once
///
/// All methods default to doing nothing.
pub trait Observer: Send {
    /// Called when the match starts. `agent` is the mark results are
    /// reported for.
    fn on_match_start(&mut self, _total_games: usize, _agent: Mark) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts (`game_num` is 0-based).
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each move with the board before it was played.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _mark: Mark,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal outcome.
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    /// Called when the match completes.
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
