//! Play command - interactive game in the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use crate::{
    Error,
    cli::output::{describe_status, render_board},
    session::{Mode, Session, SessionConfig},
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Game mode (`pvp` or `pvb`)
    #[arg(long, short = 'm')]
    pub mode: Option<Mode>,

    /// Which mark moves first (`x` or `o`)
    #[arg(long)]
    pub first: Option<Mark>,

    /// Which mark the bot plays in pvb mode (`x` or `o`)
    #[arg(long)]
    pub bot: Option<Mark>,

    /// Pause before the bot's move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// JSON session configuration; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    fn session_config(&self) -> crate::Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(first) = self.first {
            config = config.with_first_mark(first);
        }
        if let Some(bot) = self.bot {
            config = config.with_automated_mark(bot);
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_bot_delay_ms(delay);
        }
        config.validate()?;
        Ok(config)
    }
}

/// A line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Cell(usize),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "r" | "reset" | "restart" => Some(Command::Reset),
        other => match other.parse::<usize>() {
            Ok(n @ 1..=9) => Some(Command::Cell(n - 1)),
            _ => None,
        },
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session_config()?;
    info!(mode = %config.mode, first = %config.first_mark, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, stdin.lock(), stdout.lock())
}

/// Drive a session from line-based input until quit or end of input
pub(crate) fn run_session<R: BufRead, W: Write>(
    config: SessionConfig,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut session = Session::new(config);
    let delay = Duration::from_millis(config.bot_delay_ms);

    writeln!(output, "Noughts and crosses ({})", config.mode)?;
    writeln!(output, "{}", render_board(session.board()))?;

    let mut line = String::new();
    loop {
        if session.automated_turn_pending() {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            if let Some(position) = session.play_automated()? {
                writeln!(
                    output,
                    "Bot ({}) plays {}",
                    session.config().automated_mark,
                    position + 1
                )?;
                writeln!(output, "{}", render_board(session.board()))?;
                writeln!(output, "{}", describe_status(&session))?;
            }
            continue;
        }

        if session.outcome().is_terminal() {
            write!(output, "Game over. r = new game, q = quit: ")?;
        } else {
            write!(
                output,
                "{} to move (1-9, r = reset, q = quit): ",
                session.turn()
            )?;
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                session.reset();
                writeln!(output, "{}", render_board(session.board()))?;
            }
            Some(Command::Cell(position)) => match session.apply_move(position) {
                Ok(_) => {
                    writeln!(output, "{}", render_board(session.board()))?;
                    writeln!(output, "{}", describe_status(&session))?;
                }
                Err(err @ (Error::CellOccupied { .. } | Error::GameOver)) => {
                    warn!(position, %err, "move rejected");
                    writeln!(output, "{err}")?;
                }
                Err(err) => return Err(err.into()),
            },
            None => {
                warn!(input = line.trim(), "unrecognised input");
                writeln!(output, "Enter a cell number 1-9, r or q")?;
            }
        }
    }

    Ok(())
}
