//! Layout module - the board encoded as text
//!
//! One character per square, row-major, 25 rows of 24:
//!
//! | Char | Square |
//! |------|--------|
//! | `B` | blocked |
//! | `H` | hallway |
//! | `1`-`4` | door, numbered within its room |
//! | room letter | interior of that room (see [`RoomKind::letter`](crate::types::RoomKind::letter)) |

use crate::types::{Position, RoomKind};

/// The classic board.
pub const CLASSIC_LAYOUT: &str = concat!(
    "BBBBBBBBBHBBBBHBBBBBBBBB",
    "KKKKKKBHHHAAAAHHHBCCCCCC",
    "KKKKKKHHAAAAAAAAHHCCCCCC",
    "KKKKKKHHAAAAAAAAHHCCCCCC",
    "KKKKKKHHAAAAAAAAHHCCCCCC",
    "KKKKKKH1AAAAAAAA4H1CCCCB",
    "BKKKKKHHAAAAAAAAHHHHHHHH",
    "HHHH1HHHAAAAAAAAHHHHHHHB",
    "BHHHHHHHH2HHHH3HHHOOOOOO",
    "IIIIIHHHHHHHHHHHH1OOOOOO",
    "IIIIIIIIHHBBBBBHHHOOOOOO",
    "IIIIIIIIHHBBBBBHHHOOOOOO",
    "IIIIIIII1HBBBBBHHHOOOOOO",
    "IIIIIIIIHHBBBBBHHHHH1H2B",
    "IIIIIIIIHHBBBBBHHHLLLLLB",
    "IIIIIIIIHHBBBBBHHLLLLLLL",
    "BHHHHH2HHHBBBBBH2LLLLLLL",
    "HHHHHHHHHHH12HHHHLLLLLLL",
    "BHHHHH1HHXXXXXXHHHLLLLLB",
    "UUUUUUUHHXXXXXXHHHHHHHHH",
    "UUUUUUUHHXXXXXX3H1HHHHHB",
    "UUUUUUUHHXXXXXXHHSSSSSSS",
    "UUUUUUUHHXXXXXXHHSSSSSSS",
    "UUUUUUUHHXXXXXXHHSSSSSSS",
    "UUUUUUBHBXXXXXXBHBSSSSSS",
);

/// Forces a door to open through a particular room square instead of the
/// first one found by neighbour search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorOverride {
    pub door: Position,
    pub via: Position,
}

/// Fixups for [`CLASSIC_LAYOUT`].
///
/// Both doors sit on the corridor between the Billiard Room (above) and the
/// Library (below), so neighbour search alone cannot tell them apart.
pub const CLASSIC_DOOR_OVERRIDES: [DoorOverride; 2] = [
    // Library door 1
    DoorOverride {
        door: Position::new(13, 20),
        via: Position::new(14, 20),
    },
    // Billiard Room door 2
    DoorOverride {
        door: Position::new(13, 22),
        via: Position::new(12, 22),
    },
];

/// A layout character before doors are tied to rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawTile {
    Blocked,
    Hallway,
    Door(u8),
    Room(RoomKind),
}

impl RawTile {
    pub(crate) fn parse(ch: char) -> Option<Self> {
        match ch {
            'B' => Some(RawTile::Blocked),
            'H' => Some(RawTile::Hallway),
            '1'..='4' => ch.to_digit(10).map(|d| RawTile::Door(d as u8)),
            _ => RoomKind::from_letter(ch).map(RawTile::Room),
        }
    }
}
