//! # Game Settings
//!
//! User-tunable rules for a session, loadable from a JSON file.

use crate::config::{
    DEFAULT_BOARD_SIZE, DEFAULT_FOUR_PROBABILITY, DEFAULT_WIN_VALUE, MIN_BOARD_SIZE,
};
use crate::generation::TileSpawner;
use crate::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rules for a game session.
///
/// Every field has a default, so a settings file only needs to list the
/// values it changes.
///
/// # Examples
///
/// ```
/// use slide2048::GameSettings;
///
/// let settings: GameSettings = serde_json::from_str(r#"{ "board_size": 5 }"#).unwrap();
/// assert_eq!(settings.board_size, 5);
/// assert_eq!(settings.win_value, 2048);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Grid dimension
    pub board_size: usize,
    /// Tile value that wins the game
    pub win_value: u32,
    /// Probability that a spawned tile is a 4 (0.0 to 1.0)
    pub four_probability: f64,
    /// Random seed for reproducible games; entropy is used when absent
    pub seed: Option<u64>,
    /// Keep accepting moves after the win value has been reached
    pub continue_after_win: bool,
}

impl GameSettings {
    /// Default settings with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Checks that the settings describe a playable game.
    pub fn validate(&self) -> GameResult<()> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(GameError::InvalidConfig(format!(
                "win_value must be a power of two of at least 4, got {}",
                self.win_value
            )));
        }
        self.spawner()?;
        Ok(())
    }

    /// Spawner configured with this session's probability.
    pub fn spawner(&self) -> GameResult<TileSpawner> {
        TileSpawner::new(self.four_probability)
    }

    /// Loads and validates settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> GameResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: GameSettings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_value: DEFAULT_WIN_VALUE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            seed: None,
            continue_after_win: false,
        }
    }
}
