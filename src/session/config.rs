//! Configuration types for game sessions.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Mark};

/// Longest artificial "thinking" pause accepted before an automated move
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

/// Who controls the two marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Both marks are placed by people
    PlayerVsPlayer,
    /// One mark is placed by the minimax search
    #[default]
    PlayerVsBot,
}

impl FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" | "player-vs-player" | "human" => Ok(Mode::PlayerVsPlayer),
            "pvb" | "player-vs-bot" | "bot" => Ok(Mode::PlayerVsBot),
            _ => Err(Error::InvalidConfiguration {
                message: format!("unknown mode '{s}' (expected pvp or pvb)"),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::PlayerVsPlayer => f.write_str("player vs player"),
            Mode::PlayerVsBot => f.write_str("player vs bot"),
        }
    }
}

/// Configuration for a [`Session`](super::Session).
///
/// # Examples
///
/// ```
/// use noughts::session::{Mode, SessionConfig};
/// use noughts::tictactoe::Mark;
///
/// let config = SessionConfig::new(Mode::PlayerVsBot)
///     .with_first_mark(Mark::O)
///     .with_bot_delay_ms(0);
/// assert_eq!(config.automated_mark, Mark::O);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub mode: Mode,
    /// Mark that opens every game
    pub first_mark: Mark,
    /// Mark played by the search in [`Mode::PlayerVsBot`]
    pub automated_mark: Mark,
    /// Pause before the automated move is shown, applied by the driver
    pub bot_delay_ms: u64,
}

impl SessionConfig {
    /// Create a configuration for the given mode.
    ///
    /// Defaults: X opens, O is automated, 100 ms delay.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            first_mark: Mark::X,
            automated_mark: Mark::O,
            bot_delay_ms: 100,
        }
    }

    /// Set the mark that moves first.
    pub fn with_first_mark(mut self, mark: Mark) -> Self {
        self.first_mark = mark;
        self
    }

    /// Set the mark controlled by the search.
    pub fn with_automated_mark(mut self, mark: Mark) -> Self {
        self.automated_mark = mark;
        self
    }

    /// Set the thinking delay in milliseconds.
    pub fn with_bot_delay_ms(mut self, delay_ms: u64) -> Self {
        self.bot_delay_ms = delay_ms;
        self
    }

    /// Check values a file or flag may have set out of range.
    pub fn validate(&self) -> Result<()> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "bot delay {} ms exceeds the {MAX_BOT_DELAY_MS} ms limit",
                    self.bot_delay_ms
                ),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open session config {}", path.display()),
            source,
        })?;
        let config: SessionConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SessionConfig::default();
        assert_eq!(config.mode, Mode::PlayerVsBot);
        assert_eq!(config.first_mark, Mark::X);
        assert_eq!(config.automated_mark, Mark::O);
        assert_eq!(config.bot_delay_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_long_delay() {
        let delay = MAX_BOT_DELAY_MS + 1;
        let config = SessionConfig::default().with_bot_delay_ms(delay);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("pvp".parse::<Mode>().unwrap(), Mode::PlayerVsPlayer);
        assert_eq!("Player-Vs-Bot".parse::<Mode>().unwrap(), Mode::PlayerVsBot);
        assert!("solo".parse::<Mode>().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"mode":"player-vs-player"}"#;
        let config: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, Mode::PlayerVsPlayer);
        assert_eq!(config.bot_delay_ms, 100);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let config = SessionConfig::new(Mode::PlayerVsBot)
            .with_automated_mark(Mark::X)
            .with_bot_delay_ms(0);
        config.save(&path).unwrap();

        let loaded = SessionConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let path = "/nonexistent/session.json";
        let err = SessionConfig::load(path).unwrap_err();
        assert!(err.to_string().contains("session config"));
    }
}
