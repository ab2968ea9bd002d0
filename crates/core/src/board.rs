//! Board module - the tile grid, its rooms, and every token on it
//!
//! The board is a 25x24 grid stored as a flat row-major vector of tiles.
//! Coordinates are `(row, col)`, row 0 at the top.
//!
//! The occupant slots on the tiles are the only record of where an item is.
//! Items carry no position of their own; [`Board::locate`] scans the grid.
//! Every mutation goes through one private lift/put pair, so an item is always
//! on at most one tile.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::error::{BoardError, ConstructionError, RoomFullError};
use crate::layout::{DoorOverride, RawTile, CLASSIC_DOOR_OVERRIDES, CLASSIC_LAYOUT};
use crate::rng::GameRng;
use crate::room::Room;
use crate::tile::{Tile, TileKind};
use crate::types::{
    Direction, MovableItem, PersonKind, Position, RoomKind, WeaponKind, BOARD_CELLS, BOARD_COLS,
    BOARD_ROWS,
};

/// Why a step was refused. The board is unchanged after any rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The item is not on the board.
    NotOnBoard,
    /// The step would leave the grid.
    OutOfBounds,
    /// Someone is already standing on that hallway or door square.
    Occupied,
    /// Walls, and room squares not entered from a door.
    IllegalDestination,
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Walked onto a hallway or door square.
    Moved(Position),
    /// Stepped off a door into its room and landed on a random free square.
    EnteredRoom { room: RoomKind, at: Position },
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// True unless the step was rejected
    pub fn accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Row-major tiles (row * BOARD_COLS + col)
    tiles: Vec<Tile>,
    /// Indexed by [`RoomKind::index`]
    rooms: [Room; 9],
}

impl Board {
    /// Build the classic board with no items on it.
    pub fn classic() -> Result<Self, ConstructionError> {
        Self::from_layout(CLASSIC_LAYOUT, &CLASSIC_DOOR_OVERRIDES)
    }

    /// Build the classic board, put the six characters on their starting
    /// squares and scatter the six weapons into six different rooms.
    pub fn setup(rng: &mut GameRng) -> Result<Self, BoardError> {
        let mut board = Self::classic()?;
        board.place_people()?;
        board.place_weapons(rng)?;
        Ok(board)
    }

    /// Build a board from a layout string.
    ///
    /// Each door is tied to the first room square found to its right, left,
    /// below, then above, unless `overrides` names the square to use. That
    /// room square stops being a place items can be dropped.
    pub fn from_layout(layout: &str, overrides: &[DoorOverride]) -> Result<Self, ConstructionError> {
        let found = layout.chars().count();
        if found != BOARD_CELLS {
            return Err(ConstructionError::LayoutLength {
                expected: BOARD_CELLS,
                found,
            });
        }

        let mut rooms = RoomKind::ALL.map(Room::new);
        let mut raw = Vec::with_capacity(BOARD_CELLS);
        for (i, ch) in layout.chars().enumerate() {
            let at = position_of(i);
            let tile = RawTile::parse(ch).ok_or(ConstructionError::UnknownTile { ch, at })?;
            if let RawTile::Room(room) = tile {
                rooms[room.index()].add_cell(at);
            }
            raw.push(tile);
        }

        let mut tiles = Vec::with_capacity(BOARD_CELLS);
        for (i, &tile) in raw.iter().enumerate() {
            let at = position_of(i);
            let kind = match tile {
                RawTile::Blocked => TileKind::Blocked,
                RawTile::Hallway => TileKind::Hallway,
                RawTile::Room(room) => TileKind::RoomCell { room },
                RawTile::Door(index) => {
                    let (via, room) = resolve_door(&raw, at, index, overrides)?;
                    rooms[room.index()].remove_cell(via);
                    rooms[room.index()].add_door(index, at);
                    debug!("door {} at {} opens into the {} via {}", index, at, room, via);
                    TileKind::Door { index, room }
                }
            };
            tiles.push(Tile::new(kind));
        }

        for room in &rooms {
            if room.doors().is_empty() && raw.contains(&RawTile::Room(room.kind())) {
                return Err(ConstructionError::DoorlessRoom(room.kind()));
            }
        }

        Ok(Self { tiles, rooms })
    }

    /// Get the tile at `pos`, or `None` if out of bounds
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        if !pos.in_bounds() {
            return None;
        }
        self.tiles.get(pos.index())
    }

    /// All tiles, row-major
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn occupant(&self, pos: Position) -> Option<MovableItem> {
        self.tile(pos).and_then(Tile::occupant)
    }

    pub fn room(&self, kind: RoomKind) -> &Room {
        &self.rooms[kind.index()]
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Where `item` currently stands
    pub fn locate(&self, item: MovableItem) -> Option<Position> {
        self.tiles
            .iter()
            .position(|t| t.occupant() == Some(item))
            .map(position_of)
    }

    /// True iff `item` stands on a room square.
    pub fn is_in_room(&self, item: MovableItem) -> bool {
        self.room_of(item).is_some()
    }

    /// The room `item` is inside. Standing on a door does not count.
    pub fn room_of(&self, item: MovableItem) -> Option<RoomKind> {
        let tile = self.tile(self.locate(item)?)?;
        match tile.kind() {
            TileKind::RoomCell { room } => Some(room),
            _ => None,
        }
    }

    /// Every door of `room` has someone standing on it.
    pub fn is_sealed(&self, room: RoomKind) -> bool {
        self.room(room)
            .doors()
            .values()
            .all(|&door| self.occupant(door).is_some())
    }

    /// Indices of the doors of `room` nobody is standing on
    pub fn free_doors(&self, room: RoomKind) -> Vec<u8> {
        self.room(room)
            .doors()
            .iter()
            .filter(|(_, &door)| self.occupant(door).is_none())
            .map(|(&index, _)| index)
            .collect()
    }

    /// Put each character on its starting square.
    pub fn place_people(&mut self) -> Result<(), ConstructionError> {
        for person in PersonKind::ALL {
            let item = MovableItem::Person(person);
            if !self.place_at(item, person.start()) {
                return Err(ConstructionError::BadStart {
                    item,
                    at: person.start(),
                });
            }
        }
        Ok(())
    }

    /// Put the six weapons into six distinct rooms chosen uniformly at random.
    pub fn place_weapons(&mut self, rng: &mut GameRng) -> Result<(), RoomFullError> {
        let mut rooms = RoomKind::ALL;
        rng.shuffle(&mut rooms);
        for (weapon, room) in WeaponKind::ALL.into_iter().zip(rooms) {
            let at = self.teleport_to_room(MovableItem::Weapon(weapon), room, rng)?;
            info!("{} hidden in the {} at {}", weapon, room, at);
        }
        Ok(())
    }

    /// Place `item` exactly on `pos`, taking it off its current square.
    ///
    /// Fails (returns false) if `pos` is off the board, blocked, or occupied.
    pub fn place_at(&mut self, item: MovableItem, pos: Position) -> bool {
        match self.tile(pos) {
            Some(tile) if tile.kind() != TileKind::Blocked && !tile.is_occupied() => {
                self.lift(item);
                self.put(item, pos);
                true
            }
            _ => false,
        }
    }

    /// Take one step with `item`.
    ///
    /// - Onto a free hallway or door square: moves there.
    /// - Onto an occupied hallway or door square: rejected.
    /// - From a door onto a room square: lands on a random free square of
    ///   that room, not necessarily the adjacent one.
    /// - Anything else: rejected.
    ///
    /// Only a full room is an error; it means the item counts no longer fit
    /// the rooms.
    pub fn move_item(
        &mut self,
        item: MovableItem,
        dir: Direction,
        rng: &mut GameRng,
    ) -> Result<MoveOutcome, RoomFullError> {
        let Some(from) = self.locate(item) else {
            return Ok(MoveOutcome::Rejected(MoveRejection::NotOnBoard));
        };
        let Some(to) = from.step(dir) else {
            return Ok(MoveOutcome::Rejected(MoveRejection::OutOfBounds));
        };

        let source = self.tiles[from.index()].kind();
        let target = &self.tiles[to.index()];
        match (source, target.kind()) {
            (_, TileKind::Hallway | TileKind::Door { .. }) => {
                if target.is_occupied() {
                    debug!("{} blocked at {} by {:?}", item, to, target.occupant());
                    return Ok(MoveOutcome::Rejected(MoveRejection::Occupied));
                }
                self.lift(item);
                self.put(item, to);
                Ok(MoveOutcome::Moved(to))
            }
            (TileKind::Door { .. }, TileKind::RoomCell { room }) => {
                let at = self.teleport_to_room(item, room, rng)?;
                Ok(MoveOutcome::EnteredRoom { room, at })
            }
            _ => Ok(MoveOutcome::Rejected(MoveRejection::IllegalDestination)),
        }
    }

    /// Move `item` straight onto the door square `door`.
    ///
    /// Fails if `door` is not a door or someone is standing on it.
    pub fn teleport_to_door(&mut self, item: MovableItem, door: Position) -> bool {
        match self.tile(door) {
            Some(tile) if tile.is_door() && !tile.is_occupied() => {
                self.lift(item);
                self.put(item, door);
                true
            }
            _ => false,
        }
    }

    /// Move `item` onto a random free square of `room`.
    ///
    /// The item keeps its current square if the room is full.
    pub fn teleport_to_room(
        &mut self,
        item: MovableItem,
        room: RoomKind,
        rng: &mut GameRng,
    ) -> Result<Position, RoomFullError> {
        let tiles = &self.tiles;
        let at = self.rooms[room.index()].pick_free_cell(|p| !tiles[p.index()].is_occupied(), rng)?;
        self.lift(item);
        self.put(item, at);
        Ok(at)
    }

    /// One line per row, one glyph per square (see [`Tile::glyph`]).
    pub fn render(&self) -> String {
        let cols = BOARD_COLS as usize;
        let mut out = String::with_capacity(BOARD_CELLS + BOARD_ROWS as usize);
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 && i % cols == 0 {
                out.push('\n');
            }
            out.push(tile.glyph());
        }
        out
    }

    /// In-bounds orthogonal neighbours of `pos`
    pub fn neighbours(pos: Position) -> ArrayVec<Position, 4> {
        Direction::DOOR_PRECEDENCE
            .iter()
            .filter_map(|&dir| pos.step(dir))
            .collect()
    }

    fn lift(&mut self, item: MovableItem) -> Option<Position> {
        let pos = self.locate(item)?;
        self.tiles[pos.index()].set_occupant(None);
        Some(pos)
    }

    fn put(&mut self, item: MovableItem, pos: Position) {
        self.tiles[pos.index()].set_occupant(Some(item));
    }
}

fn position_of(index: usize) -> Position {
    let cols = BOARD_COLS as usize;
    Position::new((index / cols) as u8, (index % cols) as u8)
}

fn resolve_door(
    raw: &[RawTile],
    at: Position,
    index: u8,
    overrides: &[DoorOverride],
) -> Result<(Position, RoomKind), ConstructionError> {
    if let Some(fixup) = overrides.iter().find(|o| o.door == at) {
        let via = fixup.via;
        return match raw.get(via.index()).filter(|_| via.in_bounds()) {
            Some(&RawTile::Room(room)) => Ok((via, room)),
            _ => Err(ConstructionError::BadOverride { door: at, via }),
        };
    }

    Board::neighbours(at)
        .into_iter()
        .find_map(|n| match raw[n.index()] {
            RawTile::Room(room) => Some((n, room)),
            _ => None,
        })
        .ok_or(ConstructionError::UnresolvedDoor { index, at })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hallway_layout_with(edits: &[(usize, char)]) -> String {
        let mut chars: Vec<char> = std::iter::repeat('H').take(BOARD_CELLS).collect();
        for &(i, ch) in edits {
            chars[i] = ch;
        }
        chars.into_iter().collect()
    }

    #[test]
    fn test_neighbour_order_is_right_left_down_up() {
        let n = Board::neighbours(Position::new(5, 5));
        assert_eq!(
            n.as_slice(),
            &[
                Position::new(5, 6),
                Position::new(5, 4),
                Position::new(6, 5),
                Position::new(4, 5),
            ]
        );
        assert_eq!(Board::neighbours(Position::new(0, 0)).len(), 2);
    }

    #[test]
    fn test_layout_length_checked() {
        assert_eq!(
            Board::from_layout("HHH", &[]),
            Err(ConstructionError::LayoutLength {
                expected: BOARD_CELLS,
                found: 3
            })
        );
    }

    #[test]
    fn test_unknown_character_reported_with_position() {
        let layout = hallway_layout_with(&[(25, '?')]);
        assert_eq!(
            Board::from_layout(&layout, &[]),
            Err(ConstructionError::UnknownTile {
                ch: '?',
                at: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn test_door_without_room_fails() {
        let layout = hallway_layout_with(&[(30, '1')]);
        assert_eq!(
            Board::from_layout(&layout, &[]),
            Err(ConstructionError::UnresolvedDoor {
                index: 1,
                at: Position::new(1, 6)
            })
        );
    }

    #[test]
    fn test_room_without_door_fails() {
        let layout = hallway_layout_with(&[(30, 'K')]);
        assert_eq!(
            Board::from_layout(&layout, &[]),
            Err(ConstructionError::DoorlessRoom(RoomKind::Kitchen))
        );
    }

    #[test]
    fn test_first_room_neighbour_wins() {
        // Door at (1,1) with the Kitchen to the right and the Study below.
        let layout = hallway_layout_with(&[(25, '1'), (26, 'K'), (49, 'S'), (50, '1')]);
        let board = Board::from_layout(&layout, &[]).unwrap();
        assert_eq!(
            board.tile(Position::new(1, 1)).unwrap().kind(),
            TileKind::Door {
                index: 1,
                room: RoomKind::Kitchen
            }
        );
        assert!(!board.room(RoomKind::Kitchen).contains_cell(Position::new(1, 2)));
    }

    #[test]
    fn test_override_beats_neighbour_search() {
        // Door at (1,1) would find the Kitchen first; the Kitchen keeps its
        // own door at (1,4).
        let layout =
            hallway_layout_with(&[(25, '1'), (26, 'K'), (27, 'K'), (28, '1'), (49, 'S')]);
        let fixup = DoorOverride {
            door: Position::new(1, 1),
            via: Position::new(2, 1),
        };
        let board = Board::from_layout(&layout, &[fixup]).unwrap();
        assert_eq!(board.tile(Position::new(1, 1)).unwrap().room(), Some(RoomKind::Study));
        // The Kitchen square next to the door stays placeable.
        assert!(board.room(RoomKind::Kitchen).contains_cell(Position::new(1, 2)));
        assert!(!board.room(RoomKind::Study).contains_cell(Position::new(2, 1)));
    }

    #[test]
    fn test_override_must_target_room_square() {
        let layout = hallway_layout_with(&[(25, '1'), (26, 'K')]);
        let fixup = DoorOverride {
            door: Position::new(1, 1),
            via: Position::new(0, 1),
        };
        assert_eq!(
            Board::from_layout(&layout, &[fixup]),
            Err(ConstructionError::BadOverride {
                door: Position::new(1, 1),
                via: Position::new(0, 1)
            })
        );
    }

    #[test]
    fn test_render_shape() {
        let board = Board::classic().unwrap();
        let text = board.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_ROWS as usize);
        assert!(lines.iter().all(|l| l.chars().count() == BOARD_COLS as usize));
        assert_eq!(&lines[0][..10], "#########.");
    }
}
