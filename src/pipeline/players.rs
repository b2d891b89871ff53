//! Player implementations for matches
//!
//! - [`MinimaxPlayer`]: the exhaustive search, always optimal
//! - [`RandomPlayer`]: uniform baseline
//! - [`ScriptedPlayer`]: replays fixed positions, for tests and demos

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Player,
    search::best_move,
    tictactoe::{Board, Mark},
};

/// Optimal player backed by [`best_move`]
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Player for MinimaxPlayer {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        best_move(board, mark).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy player (baseline)
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<usize> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Plays a fixed sequence of positions, one per call
pub struct ScriptedPlayer {
    name: String,
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPlayer {
    pub fn new(name: String, script: Vec<usize>) -> Self {
        Self {
            name,
            script,
            cursor: 0,
        }
    }

    /// Restart the script from its first position
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl Player for ScriptedPlayer {
    fn select_move(&mut self, _board: &Board, _mark: Mark) -> Result<usize> {
        let Some(&position) = self.script.get(self.cursor) else {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "scripted player '{}' ran out of moves after {}",
                    self.name,
                    self.script.len()
                ),
            });
        };
        self.cursor += 1;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
