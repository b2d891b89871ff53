//! Player port - abstraction over anything that picks moves
//!
//! The session calls the search directly; this port exists for drivers that
//! pit arbitrary move sources against each other, such as the match runner.

use crate::{
    Result,
    tictactoe::{Board, Mark},
};

/// Something that chooses where to place a mark.
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Player,
///     tictactoe::{Board, Mark},
/// };
///
/// struct FirstEmpty;
///
/// impl Player for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _mark: Mark) -> noughts::Result<usize> {
///         board
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
/// ```
pub trait Player: Send {
    /// Select a position (0-8) for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available.
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Get the player's name, used in reports and logs.
    fn name(&self) -> &str;

    /// Seed the player's random number generator.
    ///
    /// The default implementation does nothing, suitable for deterministic
    /// players.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
