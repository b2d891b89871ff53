//! CLI subcommands

pub mod best_move;
pub mod match_cmd;
pub mod play;
