//! Requests, answers and events exchanged with the input/output layer.
//!
//! The engine never prompts. It exposes the decision it is waiting for as a
//! [`Request`], accepts an already-validated [`Answer`], and reports what
//! happened as a list of [`Event`]s.

use crate::core::{MoveRejection, Solution};
use crate::types::{Card, MoveCommand, MovableItem, PersonKind, Position, RoomKind, WeaponKind};

/// A decision the current player has to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Yes/no: accuse in `room`?
    OfferAccusation { player: PersonKind, room: RoomKind },
    /// Pick one of `doors` (door indices of `room`) to leave through.
    ChooseExitDoor {
        player: PersonKind,
        room: RoomKind,
        doors: Vec<u8>,
    },
    /// A step or finish, with `remaining` moves left this turn.
    Move { player: PersonKind, remaining: u8 },
    NameWeapon { player: PersonKind, room: RoomKind },
    NamePerson { player: PersonKind, room: RoomKind },
    /// Yes/no: nobody disputed, look in the envelope?
    OfferEnvelope { player: PersonKind },
}

impl Request {
    pub fn player(&self) -> PersonKind {
        match self {
            Request::OfferAccusation { player, .. }
            | Request::ChooseExitDoor { player, .. }
            | Request::Move { player, .. }
            | Request::NameWeapon { player, .. }
            | Request::NamePerson { player, .. }
            | Request::OfferEnvelope { player } => *player,
        }
    }
}

/// A pre-validated answer to the pending [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Confirm(bool),
    Door(u8),
    Move(MoveCommand),
    Weapon(WeaponKind),
    Person(PersonKind),
}

/// Something that happened while applying an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    TurnStarted { player: PersonKind, dice: (u8, u8) },
    LeftRoom { player: PersonKind, room: RoomKind, door: u8 },
    /// Every door of the room is occupied; the turn is lost.
    RoomSealed { player: PersonKind, room: RoomKind },
    DoorBlocked { player: PersonKind, door: u8 },
    Moved { player: PersonKind, to: Position, remaining: u8 },
    MoveRejected { player: PersonKind, reason: MoveRejection },
    EnteredRoom { player: PersonKind, room: RoomKind },
    Accused {
        player: PersonKind,
        person: PersonKind,
        weapon: WeaponKind,
        room: RoomKind,
    },
    /// A named item was brought into the room of the accusation.
    Summoned { item: MovableItem, room: RoomKind },
    CannotRefute { player: PersonKind },
    Refuted { player: PersonKind, by: PersonKind, card: Card },
    Undisputed { player: PersonKind },
    EnvelopeWrong { player: PersonKind },
    Won { player: PersonKind, solution: Solution },
    TurnEnded { player: PersonKind },
}
