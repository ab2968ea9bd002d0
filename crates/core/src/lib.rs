//! Core game logic module - the board, its rooms, and the cards
//!
//! This crate holds the state of a Cluedo table and the rules for moving
//! tokens around it. It has **no dependencies** on terminal I/O:
//!
//! - **Deterministic**: every random choice goes through one seeded [`GameRng`]
//! - **Testable**: boards can be built from any layout string
//! - **Self-checking**: a layout whose doors cannot be tied to rooms is
//!   rejected at construction
//!
//! # Module Structure
//!
//! - [`tile`]: square kinds and the occupant slot
//! - [`room`]: a room's placeable squares and numbered doors
//! - [`layout`]: the classic layout string and its door fixups
//! - [`board`]: construction, movement, teleports and queries
//! - [`deck`]: murder envelope and dealing
//! - [`player`]: a player's character and hand
//! - [`rng`]: the injectable random source
//! - [`error`]: fatal setup errors
//!
//! # Movement Rules
//!
//! - Hallway and door squares can be stepped onto when free
//! - Stepping off a door into its room drops the token on a random free
//!   room square
//! - Rooms are left only by jumping straight onto one of their doors
//! - Blocked squares and room squares (other than from a door) are never
//!   valid steps
//!
//! # Example
//!
//! ```
//! use cluedo_core::{Board, GameRng};
//! use cluedo_core::types::{Direction, MovableItem, PersonKind, Position};
//!
//! let mut rng = GameRng::new(12345);
//! let mut board = Board::setup(&mut rng).unwrap();
//!
//! let scarlett = MovableItem::Person(PersonKind::Scarlett);
//! assert_eq!(board.locate(scarlett), Some(Position::new(24, 7)));
//!
//! let outcome = board.move_item(scarlett, Direction::Up, &mut rng).unwrap();
//! assert!(outcome.accepted());
//! assert_eq!(board.locate(scarlett), Some(Position::new(23, 7)));
//! ```

pub mod board;
pub mod deck;
pub mod error;
pub mod layout;
pub mod player;
pub mod rng;
pub mod room;
pub mod tile;

pub use cluedo_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome, MoveRejection};
pub use deck::{deal, Deal, Solution};
pub use error::{BoardError, ConstructionError, RoomFullError};
pub use layout::{DoorOverride, CLASSIC_DOOR_OVERRIDES, CLASSIC_LAYOUT};
pub use player::Player;
pub use rng::GameRng;
pub use room::Room;
pub use tile::{Tile, TileKind};
