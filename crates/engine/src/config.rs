//! Game configuration.

use thiserror::Error;

use crate::types::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs {min} to {max} players, got {got}")]
    PlayerCount { got: u8, min: u8, max: u8 },
}

/// Validated settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    players: u8,
    seed: Option<u64>,
}

impl GameConfig {
    /// `seed: None` draws a fresh seed from the OS.
    pub fn new(players: u8, seed: Option<u64>) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(ConfigError::PlayerCount {
                got: players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        Ok(Self { players, seed })
    }

    pub fn players(&self) -> u8 {
        self.players
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
