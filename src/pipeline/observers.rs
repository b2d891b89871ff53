//! Observer implementations for matches

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, Mark, Outcome},
};

fn tally(agent: Mark, outcome: Outcome, wins: &mut usize, draws: &mut usize, losses: &mut usize) {
    match outcome {
        Outcome::Win(winner) if winner == agent => *wins += 1,
        Outcome::Win(_) => *losses += 1,
        Outcome::Draw => *draws += 1,
        Outcome::InProgress => {}
    }
}

/// Progress observer - shows a progress bar with running W/D/L counts
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    agent: Mark,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            agent: Mark::X,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn summary(&self) -> String {
        format!("W:{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize, agent: Mark) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.agent = agent;
        pb.set_message(self.summary());
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        tally(
            self.agent,
            outcome,
            &mut self.wins,
            &mut self.draws,
            &mut self.losses,
        );

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.summary());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.summary());
        }
        Ok(())
    }
}

/// Metrics observer - tracks outcomes and game lengths
pub struct MetricsObserver {
    agent: Mark,
    wins: usize,
    draws: usize,
    losses: usize,
    total_games: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            agent: Mark::X,
            wins: 0,
            draws: 0,
            losses: 0,
            total_games: 0,
            move_counts: Vec::new(),
        }
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn losses(&self) -> usize {
        self.losses
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    /// Get average game length in moves
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_match_start(&mut self, _total_games: usize, agent: Mark) -> Result<()> {
        self.agent = agent;
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _mark: Mark,
        _position: usize,
    ) -> Result<()> {
        if let Some(count) = self.move_counts.last_mut() {
            *count += 1;
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: Outcome) -> Result<()> {
        tally(
            self.agent,
            outcome,
            &mut self.wins,
            &mut self.draws,
            &mut self.losses,
        );
        self.total_games += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counts_from_agent_perspective() {
        let mut metrics = MetricsObserver::new();
        metrics.on_match_start(3, Mark::O).unwrap();

        let decided = [Outcome::Win(Mark::O), Outcome::Win(Mark::X)];
        for (game, outcome) in decided.into_iter().chain([Outcome::Draw]).enumerate() {
            metrics.on_game_start(game).unwrap();
            metrics.on_move(game, 0, &Board::new(), Mark::X, 4).unwrap();
            metrics.on_game_end(game, outcome).unwrap();
        }

        assert_eq!(metrics.wins(), 1);
        assert_eq!(metrics.losses(), 1);
        assert_eq!(metrics.draws(), 1);
        assert_eq!(metrics.total_games(), 3);
        assert!((metrics.avg_game_length() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_summary_labels_every_count() {
        let mut progress = ProgressObserver::new();
        assert_eq!(progress.summary(), "W:0 D:0 L:0");

        progress.agent = Mark::O;
        progress.on_game_end(0, Outcome::Win(Mark::O)).unwrap();
        progress.on_game_end(1, Outcome::Draw).unwrap();
        progress.on_game_end(2, Outcome::Win(Mark::X)).unwrap();
        assert_eq!(progress.summary(), "W:1 D:1 L:1");
    }
}
