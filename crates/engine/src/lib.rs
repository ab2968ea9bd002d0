//! Turn engine - sequencing turns and resolving accusations
//!
//! The engine owns a [`Game`]: the board, the players' hands, the murder
//! envelope and the random source. It never reads input or prints. Instead
//! it exposes the decision it needs as a [`Request`] and takes an
//! [`Answer`], the way a terminal or a test would supply it.
//!
//! # Example
//!
//! ```
//! use cluedo_engine::{Answer, Game, GameConfig, Request};
//! use cluedo_engine::types::MoveCommand;
//!
//! let config = GameConfig::new(3, Some(42)).unwrap();
//! let mut game = Game::new(&config).unwrap();
//! game.start().unwrap();
//!
//! assert!(matches!(game.pending(), Some(Request::Move { .. })));
//! game.respond(Answer::Move(MoveCommand::Finish)).unwrap();
//! assert_eq!(game.turn(), 2);
//! ```

pub mod accusation;
pub mod config;
pub mod error;
pub mod game;
pub mod protocol;

pub use cluedo_core as core;
pub use cluedo_types as types;

pub use accusation::{find_refuter, Accusation, Refutation};
pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use game::Game;
pub use protocol::{Answer, Event, Request};
