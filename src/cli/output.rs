//! Output formatting and progress indicators for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    session::Session,
    tictactoe::{Board, Cell, Outcome},
};

/// Create a spinner for long searches
pub fn create_spinner(message: &str) -> crate::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Render a board with 1-9 labels on empty cells
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                match board.get(pos) {
                    Some(Cell::Empty) | None => (pos + 1).to_string(),
                    Some(cell) => cell.to_char().to_string(),
                }
            })
            .collect();
        out.push_str(&format!(" {} \n", cells.join(" | ")));
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

/// One-line status for a session
pub fn describe_status(session: &Session) -> String {
    match session.outcome() {
        Outcome::InProgress => format!("{} to move", session.turn()),
        Outcome::Win(mark) => match session.strike() {
            Some(strike) => format!("{mark} wins ({strike})"),
            None => format!("{mark} wins"),
        },
        Outcome::Draw => "Draw".to_string(),
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
