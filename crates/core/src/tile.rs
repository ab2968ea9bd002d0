//! Tile module - one square of the board
//!
//! A tile is a [`TileKind`] plus an occupant slot. The slot does not own the
//! item; it only records which token is standing there. The board keeps every
//! item on exactly one tile, so callers that write the slot directly must clear
//! the item's previous tile themselves.

use crate::types::{MovableItem, RoomKind};

/// What a square is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Wall or off-board filler. Never occupiable.
    Blocked,
    /// Corridor square.
    Hallway,
    /// Bridges the corridors and one room. `index` is only unique within
    /// that room.
    Door { index: u8, room: RoomKind },
    /// Interior square of a room.
    RoomCell { room: RoomKind },
}

/// A square and whatever is standing on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    kind: TileKind,
    occupant: Option<MovableItem>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            occupant: None,
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn occupant(&self) -> Option<MovableItem> {
        self.occupant
    }

    /// Overwrite the occupant slot. No ownership check is made.
    pub fn set_occupant(&mut self, item: Option<MovableItem>) {
        debug_assert!(
            item.is_none() || self.kind != TileKind::Blocked,
            "blocked squares never hold items"
        );
        self.occupant = item;
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Hallway or door: the squares a token walks over.
    pub fn is_walkable(&self) -> bool {
        matches!(self.kind, TileKind::Hallway | TileKind::Door { .. })
    }

    pub fn is_door(&self) -> bool {
        matches!(self.kind, TileKind::Door { .. })
    }

    /// The room a room square belongs to, or the room a door opens into.
    pub fn room(&self) -> Option<RoomKind> {
        match self.kind {
            TileKind::Door { room, .. } | TileKind::RoomCell { room } => Some(room),
            TileKind::Blocked | TileKind::Hallway => None,
        }
    }

    /// Single display character: the occupant if any, else a per-kind default.
    pub fn glyph(&self) -> char {
        if let Some(item) = self.occupant {
            return item.glyph();
        }
        match self.kind {
            TileKind::Blocked => '#',
            TileKind::Hallway => '.',
            TileKind::Door { index, .. } => char::from_digit(index as u32, 10).unwrap_or('?'),
            TileKind::RoomCell { .. } => ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PersonKind, WeaponKind};

    #[test]
    fn new_tile_is_empty() {
        let tile = Tile::new(TileKind::Hallway);
        assert_eq!(tile.occupant(), None);
        assert!(!tile.is_occupied());
        assert!(tile.is_walkable());
    }

    #[test]
    fn set_occupant_overwrites() {
        let mut tile = Tile::new(TileKind::Hallway);
        tile.set_occupant(Some(PersonKind::Green.into()));
        tile.set_occupant(Some(WeaponKind::Rope.into()));
        assert_eq!(tile.occupant(), Some(MovableItem::Weapon(WeaponKind::Rope)));
        tile.set_occupant(None);
        assert_eq!(tile.occupant(), None);
    }

    #[test]
    fn glyph_prefers_occupant() {
        let mut door = Tile::new(TileKind::Door {
            index: 3,
            room: RoomKind::Hall,
        });
        assert_eq!(door.glyph(), '3');
        door.set_occupant(Some(PersonKind::Peacock.into()));
        assert_eq!(door.glyph(), 'E');
    }

    #[test]
    fn room_lookup() {
        let cell = Tile::new(TileKind::RoomCell {
            room: RoomKind::Study,
        });
        assert_eq!(cell.room(), Some(RoomKind::Study));
        assert!(!cell.is_walkable());
        assert_eq!(Tile::new(TileKind::Blocked).room(), None);
    }
}
