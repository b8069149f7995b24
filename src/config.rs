//! Session configuration

use crate::board::{Board, Stone, DEFAULT_BOARD_SIZE};
use crate::error::ConfigError;

/// Settings for a [`crate::GameSession`].
///
/// ```
/// use gomoku::{GameConfig, Stone};
///
/// let config = GameConfig::default().with_board_size(9).with_seed(3);
/// assert_eq!(config.board_size, 9);
/// assert_eq!(config.ai_color, Stone::White);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board edge length (5 to 99)
    pub board_size: usize,
    /// Color the automated opponent plays
    pub ai_color: Stone,
    /// Whether the automated opponent is on; off means two human players
    pub ai_enabled: bool,
    /// Seed for the opponent's random tie-breaks; `None` uses OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ai_color: Stone::White,
            ai_enabled: true,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_ai_color(mut self, color: Stone) -> Self {
        self.ai_color = color;
        self
    }

    #[must_use]
    pub fn with_ai_enabled(mut self, enabled: bool) -> Self {
        self.ai_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::cell_count(self.board_size)?;
        if self.ai_color == Stone::Empty {
            return Err(ConfigError::InvalidPlayer(self.ai_color));
        }
        Ok(())
    }
}
