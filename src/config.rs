//! External configuration for session creation.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Options supplied at session-creation time.
///
/// Board size is an external parameter, not engine state. The engine holds
/// no process-wide configuration of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N for new games. Conventionally 3.
    #[serde(default = "default_board_size")]
    pub board_size: usize,
}

fn default_board_size() -> usize {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
        }
    }
}

impl GameConfig {
    /// Creates a config with the given board size.
    #[instrument]
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Parses a config from TOML text.
    ///
    /// Missing keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`toml::de::Error`] when the text is not valid TOML.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
