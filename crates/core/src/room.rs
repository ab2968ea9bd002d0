//! Room registry - a room's free squares and its numbered doors
//!
//! A room does not hold items itself. Occupancy lives on the board's tiles;
//! the room only knows which squares are its interior and which door squares
//! lead into it.

use std::collections::BTreeMap;

use log::warn;

use crate::error::RoomFullError;
use crate::rng::GameRng;
use crate::types::{Position, RoomKind};

/// One of the nine rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    kind: RoomKind,
    /// Interior squares items may be dropped on. Squares that sit directly
    /// inside a door are removed during board setup.
    cells: Vec<Position>,
    /// Door index -> door square
    doors: BTreeMap<u8, Position>,
}

impl Room {
    pub fn new(kind: RoomKind) -> Self {
        Self {
            kind,
            cells: Vec::new(),
            doors: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn add_cell(&mut self, pos: Position) {
        if !self.cells.contains(&pos) {
            self.cells.push(pos);
        }
    }

    /// Remove a square from the placement set. Absent squares are ignored.
    pub fn remove_cell(&mut self, pos: Position) -> bool {
        match self.cells.iter().position(|&p| p == pos) {
            Some(i) => {
                self.cells.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains_cell(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Register a door. A repeated index replaces the earlier door.
    pub fn add_door(&mut self, index: u8, pos: Position) {
        if let Some(prev) = self.doors.insert(index, pos) {
            if prev != pos {
                warn!(
                    "{}: door {} moved from {} to {}",
                    self.kind, index, prev, pos
                );
            }
        }
    }

    pub fn doors(&self) -> &BTreeMap<u8, Position> {
        &self.doors
    }

    pub fn door(&self, index: u8) -> Option<Position> {
        self.doors.get(&index).copied()
    }

    /// Pick a uniformly random square for which `is_free` holds.
    ///
    /// The room is scanned once; if nothing is free the call fails rather
    /// than retrying.
    pub fn pick_free_cell(
        &self,
        is_free: impl Fn(Position) -> bool,
        rng: &mut GameRng,
    ) -> Result<Position, RoomFullError> {
        let free: Vec<Position> = self.cells.iter().copied().filter(|&p| is_free(p)).collect();
        rng.choose(&free)
            .copied()
            .ok_or(RoomFullError { room: self.kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_room() -> Room {
        let mut room = Room::new(RoomKind::Lounge);
        for col in 0..3 {
            room.add_cell(Position::new(0, col));
        }
        room
    }

    #[test]
    fn remove_cell_is_idempotent() {
        let mut room = small_room();
        assert!(room.remove_cell(Position::new(0, 1)));
        assert!(!room.remove_cell(Position::new(0, 1)));
        assert!(!room.remove_cell(Position::new(9, 9)));
        assert_eq!(room.cells().len(), 2);
    }

    #[test]
    fn add_cell_ignores_duplicates() {
        let mut room = small_room();
        room.add_cell(Position::new(0, 0));
        assert_eq!(room.cells().len(), 3);
    }

    #[test]
    fn duplicate_door_index_overwrites() {
        let mut room = small_room();
        room.add_door(1, Position::new(1, 0));
        room.add_door(1, Position::new(1, 2));
        assert_eq!(room.doors().len(), 1);
        assert_eq!(room.door(1), Some(Position::new(1, 2)));
    }

    #[test]
    fn pick_free_cell_only_returns_free_squares() {
        let room = small_room();
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            let pos = room
                .pick_free_cell(|p| p != Position::new(0, 0), &mut rng)
                .unwrap();
            assert_ne!(pos, Position::new(0, 0));
        }
    }

    #[test]
    fn pick_free_cell_fails_when_full() {
        let room = small_room();
        let mut rng = GameRng::new(3);
        assert_eq!(
            room.pick_free_cell(|_| false, &mut rng),
            Err(RoomFullError {
                room: RoomKind::Lounge
            })
        );
    }
}
