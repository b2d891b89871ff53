//! Command-line front end
//!
//! An interactive board, a position analyser and a match runner.

pub mod commands;
pub mod output;
