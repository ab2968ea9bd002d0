//! Fatal setup and placement errors.
//!
//! Rejected moves are not errors; they come back as
//! [`MoveOutcome::Rejected`](crate::board::MoveOutcome). The types here mean
//! the data model itself is broken: a malformed layout, or a room asked to
//! hold more items than it has squares.

use thiserror::Error;

use crate::types::{MovableItem, Position, RoomKind};

/// The layout string (or the items placed on it) cannot form a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("layout has {found} squares, expected {expected}")]
    LayoutLength { expected: usize, found: usize },

    #[error("unknown layout character {ch:?} at {at}")]
    UnknownTile { ch: char, at: Position },

    #[error("door {index} at {at} has no room square beside it")]
    UnresolvedDoor { index: u8, at: Position },

    #[error("door override at {door} points at {via}, which is not a room square")]
    BadOverride { door: Position, via: Position },

    #[error("the {0} has squares but no door")]
    DoorlessRoom(RoomKind),

    #[error("{item} cannot start at {at}")]
    BadStart { item: MovableItem, at: Position },
}

/// Every square of a room is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free square left in the {room}")]
pub struct RoomFullError {
    pub room: RoomKind,
}

/// Anything that can abort board setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    RoomFull(#[from] RoomFullError),
}
