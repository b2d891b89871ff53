//! Match command - play the optimal search against an opponent

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    pipeline::{
        MatchConfig, MatchResult, MatchRunner, MinimaxPlayer, Player, ProgressObserver,
        RandomPlayer,
    },
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Play repeated games against the optimal search")]
pub struct MatchArgs {
    /// Opponent type (`optimal` or `random`)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mark played by the optimal search (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub agent: Mark,

    /// Mark that opens every game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: Mark,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub(crate) fn create_opponent(kind: &str) -> Result<Box<dyn Player>> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "random" => Ok(Box::new(RandomPlayer::new("Random".to_string()))),
        "optimal" | "minimax" => Ok(Box::new(MinimaxPlayer::new("Optimal".to_string()))),
        other => Err(anyhow!(
            "Unknown opponent type: '{other}'. Supported: random, optimal"
        )),
    }
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let result = run_match(&args)?;

    print_section("Match Results");
    print_kv("Total games", &result.total_games.to_string());
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }
    Ok(())
}

pub(crate) fn run_match(args: &MatchArgs) -> Result<MatchResult> {
    let mut opponent = create_opponent(&args.opponent)?;
    let mut agent = MinimaxPlayer::new("Optimal".to_string());

    let config = MatchConfig {
        games: args.games,
        seed: args.seed,
        agent_mark: args.agent,
        first_mark: args.first,
    };

    let mut runner = MatchRunner::new(config);
    if !args.no_progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }

    Ok(runner.run(&mut agent, opponent.as_mut())?)
}
