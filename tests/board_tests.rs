//! Board construction tests against the classic layout

use std::collections::HashSet;

use cluedo::core::{Board, GameRng, TileKind, CLASSIC_DOOR_OVERRIDES};
use cluedo::types::{MovableItem, PersonKind, Position, RoomKind, WeaponKind};

#[test]
fn test_every_door_resolves_to_one_room() {
    let board = Board::classic().unwrap();
    let mut doors = 0;

    for (i, tile) in board.tiles().iter().enumerate() {
        if let TileKind::Door { index, room } = tile.kind() {
            let at = Position::from_index(i).unwrap();
            assert_eq!(board.room(room).door(index), Some(at), "door at {}", at);

            let owners = board
                .rooms()
                .iter()
                .filter(|r| r.doors().values().any(|&d| d == at))
                .count();
            assert_eq!(owners, 1, "door at {} belongs to {} rooms", at, owners);
            doors += 1;
        }
    }
    assert_eq!(doors, 17);
}

#[test]
fn test_every_room_has_a_door() {
    let board = Board::classic().unwrap();
    for room in board.rooms() {
        assert!(!room.doors().is_empty(), "{} has no door", room.name());
    }
}

#[test]
fn test_door_counts() {
    let board = Board::classic().unwrap();
    let count = |room| board.room(room).doors().len();
    assert_eq!(count(RoomKind::Ballroom), 4);
    assert_eq!(count(RoomKind::Hall), 3);
    assert_eq!(count(RoomKind::Library), 2);
    assert_eq!(count(RoomKind::BilliardRoom), 2);
    assert_eq!(count(RoomKind::DiningRoom), 2);
    assert_eq!(count(RoomKind::Kitchen), 1);
    assert_eq!(count(RoomKind::Lounge), 1);
    assert_eq!(count(RoomKind::Study), 1);
    assert_eq!(count(RoomKind::Conservatory), 1);
}

#[test]
fn test_consumed_cells_are_not_placeable() {
    let board = Board::classic().unwrap();

    // Kitchen door (7, 4) opens through the square above it
    let kitchen = board.room(RoomKind::Kitchen);
    assert!(!kitchen.contains_cell(Position::new(6, 4)));
    assert!(kitchen.contains_cell(Position::new(6, 3)));
    assert_eq!(
        board.tile(Position::new(6, 4)).unwrap().kind(),
        TileKind::RoomCell {
            room: RoomKind::Kitchen
        }
    );

    for room in board.rooms() {
        for &door in room.doors().values() {
            let via = consumed(&board, door);
            assert_eq!(
                board.tile(via).unwrap().kind(),
                TileKind::RoomCell { room: room.kind() }
            );
            assert!(
                !room.contains_cell(via),
                "{} is both a room square and the way in through door {}",
                via,
                door
            );
        }
    }
}

/// The room square a door opens through
fn consumed(board: &Board, door: Position) -> Position {
    match CLASSIC_DOOR_OVERRIDES.iter().find(|o| o.door == door) {
        Some(o) => o.via,
        None => Board::neighbours(door)
            .into_iter()
            .find(|&n| matches!(board.tile(n).unwrap().kind(), TileKind::RoomCell { .. }))
            .unwrap(),
    }
}

#[test]
fn test_fixups_hold() {
    let board = Board::classic().unwrap();

    assert_eq!(
        board.tile(Position::new(13, 20)).unwrap().kind(),
        TileKind::Door {
            index: 1,
            room: RoomKind::Library
        }
    );
    assert_eq!(
        board.tile(Position::new(13, 22)).unwrap().kind(),
        TileKind::Door {
            index: 2,
            room: RoomKind::BilliardRoom
        }
    );
    assert!(!board
        .room(RoomKind::BilliardRoom)
        .contains_cell(Position::new(12, 22)));
    // the Library square below the Billiard Room door stays placeable
    assert!(board
        .room(RoomKind::Library)
        .contains_cell(Position::new(14, 22)));
}

#[test]
fn test_setup_places_everything() {
    let mut rng = GameRng::new(2024);
    let board = Board::setup(&mut rng).unwrap();

    for person in PersonKind::ALL {
        assert_eq!(board.locate(MovableItem::Person(person)), Some(person.start()));
    }

    let rooms: HashSet<RoomKind> = WeaponKind::ALL
        .into_iter()
        .map(|w| board.room_of(MovableItem::Weapon(w)).unwrap())
        .collect();
    assert_eq!(rooms.len(), 6, "weapons share a room: {:?}", rooms);
}

#[test]
fn test_setup_is_reproducible() {
    let a = Board::setup(&mut GameRng::new(99)).unwrap();
    let b = Board::setup(&mut GameRng::new(99)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.render(), b.render());
}
