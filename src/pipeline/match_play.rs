//! Repeated games between two players

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{Observer, Player},
    tictactoe::{Board, Mark, Outcome, evaluate},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed handed to both players
    pub seed: Option<u64>,

    /// Mark played by the agent; results are counted for it
    pub agent_mark: Mark,

    /// Mark that opens every game
    pub first_mark: Mark,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            agent_mark: Mark::O,
            first_mark: Mark::X,
        }
    }
}

/// Result of a match, from the agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl MatchResult {
    /// Create a result and derive its rates
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a series of games between an agent and an opponent
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    /// Create a new match runner
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run every configured game and report the agent's record
    pub fn run(
        &mut self,
        agent: &mut dyn Player,
        opponent: &mut dyn Player,
    ) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        info!(
            games = self.config.games,
            agent = agent.name(),
            opponent = opponent.name(),
            "starting match"
        );

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games, self.config.agent_mark)?;
        }

        for game_num in 0..self.config.games {
            let outcome = self.play_game(game_num, agent, opponent)?;

            match outcome {
                Outcome::Win(winner) if winner == self.config.agent_mark => wins += 1,
                Outcome::Win(_) => losses += 1,
                Outcome::Draw => draws += 1,
                Outcome::InProgress => unreachable!("play_game returns terminal outcomes"),
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        Ok(MatchResult::new(self.config.games, wins, draws, losses))
    }

    /// Play a single game to completion
    fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Player,
        opponent: &mut dyn Player,
    ) -> Result<Outcome> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut board = Board::new();
        let mut mark = self.config.first_mark;
        let mut step_num = 0;

        loop {
            let outcome = evaluate(&board);
            if outcome.is_terminal() {
                debug!(game_num, board = %board.encode(), ?outcome, "game finished");
                return Ok(outcome);
            }

            let player: &mut dyn Player = if mark == self.config.agent_mark {
                &mut *agent
            } else {
                &mut *opponent
            };
            let position = player.select_move(&board, mark)?;
            let next = board.place(position, mark).map_err(|err| match err {
                Error::InvalidPosition { .. } | Error::CellOccupied { .. } => Error::IllegalMove {
                    player: player.name().to_string(),
                    position,
                    reason: err.to_string(),
                },
                other => other,
            })?;

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, &board, mark, position)?;
            }

            board = next;
            mark = mark.opponent();
            step_num += 1;
        }
    }
}
