//! noughts CLI - play and analyse noughts and crosses against a minimax search

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Noughts and crosses with an optimal opponent", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Show the optimal move for a position
    BestMove(noughts::cli::commands::best_move::BestMoveArgs),

    /// Play repeated games against the optimal search
    Match(noughts::cli::commands::match_cmd::MatchArgs),
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::BestMove(args) => noughts::cli::commands::best_move::execute(args),
        Commands::Match(args) => noughts::cli::commands::match_cmd::execute(args),
    }
}
