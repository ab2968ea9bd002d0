//! One line of text per engine event.

use crate::core::MoveRejection;
use crate::engine::Event;
use crate::types::MovableItem;

/// Human-readable description of `event`.
pub fn describe(event: &Event) -> String {
    match *event {
        Event::TurnStarted { player, dice } => format!(
            "{} rolled {} and {} ({} moves).",
            player,
            dice.0,
            dice.1,
            dice.0 + dice.1
        ),
        Event::LeftRoom { player, room, door } => {
            format!("{} left the {} by door {}.", player, room, door)
        }
        Event::RoomSealed { player, room } => format!(
            "Every door of the {} is blocked. {} cannot leave this turn.",
            room, player
        ),
        Event::DoorBlocked { door, .. } => format!("Someone is blocking door {}.", door),
        Event::Moved { player, to, remaining } => {
            format!("{} moved to {}, {} left.", player, to, moves(remaining))
        }
        Event::MoveRejected { player, reason } => match reason {
            MoveRejection::NotOnBoard => format!("{} is not on the board.", player),
            MoveRejection::OutOfBounds => "That would leave the board.".to_string(),
            MoveRejection::Occupied => "Someone is already on that square.".to_string(),
            MoveRejection::IllegalDestination => "You can't move to that square.".to_string(),
        },
        Event::EnteredRoom { player, room } => format!("{} entered the {}.", player, room),
        Event::Accused {
            player,
            person,
            weapon,
            room,
        } => format!(
            "{} accuses {} with the {} in the {}.",
            player, person, weapon, room
        ),
        Event::Summoned { item, room } => match item {
            MovableItem::Person(p) => format!("{} is brought into the {}.", p, room),
            MovableItem::Weapon(w) => format!("The {} is brought into the {}.", w, room),
        },
        Event::CannotRefute { player } => format!("{} cannot dispute it.", player),
        Event::Refuted { by, card, .. } => format!("{} disputes it with the {} card.", by, card),
        Event::Undisputed { player } => {
            format!("Nobody can dispute {}'s accusation.", player)
        }
        Event::EnvelopeWrong { player } => format!(
            "The envelope does not match {}'s accusation. Play continues.",
            player
        ),
        Event::Won { player, solution } => format!(
            "{} wins! It was {} with the {} in the {}.",
            player, solution.person, solution.weapon, solution.room
        ),
        Event::TurnEnded { player } => format!("{}'s turn is over.", player),
    }
}

fn moves(n: u8) -> String {
    match n {
        1 => "1 move".to_string(),
        n => format!("{} moves", n),
    }
}
