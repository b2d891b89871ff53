//! Best-move command - analyse a single position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::output::{create_spinner, print_kv, print_section, render_board},
    search::{ScoredMove, best_move, score_moves},
    tictactoe::{Board, Cell, Mark, Outcome, evaluate_with_line},
};

#[derive(Parser, Debug)]
#[command(about = "Show the optimal move for a position")]
pub struct BestMoveArgs {
    /// Board as 9 cells of X, O and '.', row by row (e.g. "XX.OO....")
    pub board: String,

    /// Mark to move; inferred from piece counts (X opens) when omitted
    #[arg(long)]
    pub mark: Option<Mark>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Analysis of one position for the mark to move
#[derive(Debug, Clone, Serialize)]
pub struct PositionReport {
    pub board: String,
    pub mark: Mark,
    pub outcome: Outcome,
    pub strike: Option<String>,
    pub scores: Vec<ScoredMove>,
    pub winning_moves: Vec<usize>,
    pub threats: Vec<usize>,
    pub best_move: Option<usize>,
}

/// Side to move assuming X opened and turns alternated
pub fn infer_turn(board: &Board) -> Mark {
    let x = board.cells.iter().filter(|&&c| c == Cell::X).count();
    let o = board.cells.iter().filter(|&&c| c == Cell::O).count();
    if x > o { Mark::O } else { Mark::X }
}

/// Build the report; decided boards get no search
pub fn analyse(board: &Board, mark: Mark) -> PositionReport {
    let evaluation = evaluate_with_line(board);
    let (scores, best) = if evaluation.outcome.is_terminal() {
        (Vec::new(), None)
    } else {
        (score_moves(board, mark), best_move(board, mark))
    };

    PositionReport {
        board: board.encode(),
        mark,
        outcome: evaluation.outcome,
        strike: evaluation.line.map(|line| line.strike.to_string()),
        scores,
        winning_moves: board.winning_moves(mark),
        threats: board.winning_moves(mark.opponent()),
        best_move: best,
    }
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let mark = args.mark.unwrap_or_else(|| infer_turn(&board));
    info!(board = %board.encode(), %mark, "analysing position");

    let spinner = create_spinner("Searching...")?;
    let report = analyse(&board, mark);
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", render_board(&board));
    print_kv("To move", &mark.to_string());
    print_kv("Outcome", &format!("{:?}", report.outcome));
    if let Some(strike) = &report.strike {
        print_kv("Strike", strike);
    }

    if report.outcome.is_terminal() {
        println!("\nGame is already decided; no search performed.");
        return Ok(());
    }

    print_section("Candidate moves");
    for scored in &report.scores {
        print_kv(
            &format!("cell {}", scored.position + 1),
            &format!("{:+}", scored.score),
        );
    }
    print_kv("Immediate wins", &format_cells(&report.winning_moves));
    print_kv("Opponent threats", &format_cells(&report.threats));

    match report.best_move {
        Some(position) => println!(
            "\nBest move for {mark}: cell {} (index {position})",
            position + 1
        ),
        None => println!("\nNo move: the board is full"),
    }
    Ok(())
}

fn format_cells(cells: &[usize]) -> String {
    if cells.is_empty() {
        "none".to_string()
    } else {
        cells
            .iter()
            .map(|c| (c + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
