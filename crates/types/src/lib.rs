//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental vocabulary used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the board model, the turn engine, and the console front end.
//!
//! # Board Dimensions
//!
//! The classic Cluedo board:
//!
//! - **Rows**: 25 (indexed 0-24, top to bottom)
//! - **Columns**: 24 (indexed 0-23, left to right)
//!
//! # Cast
//!
//! | Character | Glyph | Start |
//! |-----------|-------|-------|
//! | Miss Scarlett | `S` | (24, 7) |
//! | Colonel Mustard | `M` | (17, 0) |
//! | Mrs. White | `W` | (0, 9) |
//! | Mr. Green | `G` | (0, 14) |
//! | Mrs. Peacock | `E` | (6, 23) |
//! | Professor Plum | `P` | (19, 23) |
//!
//! Weapons are drawn as `C` (Candlestick), `R` (Revolver), `A` (Spanner),
//! `O` (Rope), `D` (Dagger) and `L` (Lead Pipe).
//!
//! # Examples
//!
//! ```
//! use cluedo_types::{Direction, MoveCommand, PersonKind, Position, BOARD_COLS, BOARD_ROWS};
//!
//! // Parse a console move token
//! assert_eq!(MoveCommand::from_str("w"), Some(MoveCommand::Step(Direction::Up)));
//! assert_eq!(MoveCommand::from_str("X"), Some(MoveCommand::Finish));
//!
//! // Step across the grid, staying in bounds
//! let start = PersonKind::Scarlett.start();
//! assert_eq!(start.step(Direction::Up), Some(Position::new(23, 7)));
//! assert_eq!(start.step(Direction::Down), None);
//!
//! assert_eq!(BOARD_ROWS, 25);
//! assert_eq!(BOARD_COLS, 24);
//! ```

use std::fmt;

/// Board height in rows (25)
pub const BOARD_ROWS: u8 = 25;

/// Board width in columns (24)
pub const BOARD_COLS: u8 = 24;

/// Total number of squares on the board
pub const BOARD_CELLS: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// Fewest players a game can be started with
pub const MIN_PLAYERS: u8 = 3;

/// Most players a game can be started with (one per character)
pub const MAX_PLAYERS: u8 = 6;

/// Faces on each of the two movement dice
pub const DIE_FACES: u8 = 6;

/// A square on the board, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True if the square lies on the 25x24 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_ROWS && self.col < BOARD_COLS
    }

    /// Flat row-major index (`row * BOARD_COLS + col`)
    pub fn index(&self) -> usize {
        (self.row as usize) * (BOARD_COLS as usize) + (self.col as usize)
    }

    /// Inverse of [`Position::index`]. Returns `None` past the last square.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_CELLS {
            return None;
        }
        let cols = BOARD_COLS as usize;
        Some(Self::new((index / cols) as u8, (index % cols) as u8))
    }

    /// The neighbouring square in `dir`, or `None` if it falls off the board.
    pub fn step(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= BOARD_ROWS as i16 || col >= BOARD_COLS as i16 {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal directions. There are no diagonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour lookup order used when resolving which room a door opens
    /// into: right, left, down, up.
    pub const DOOR_PRECEDENCE: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// `(row, col)` delta for one step
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parse a direction from a console token (case-insensitive)
    ///
    /// Accepts the `w a s d` keys or the full names.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("W"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "w" | "up" => Some(Direction::Up),
            "s" | "down" => Some(Direction::Down),
            "a" | "left" => Some(Direction::Left),
            "d" | "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One answer to a "move" request: take a step or stop moving for this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCommand {
    Step(Direction),
    Finish,
}

impl MoveCommand {
    /// Parse `w a s d` or `x` (finish), case-insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("x") {
            return Some(MoveCommand::Finish);
        }
        Direction::from_str(s).map(MoveCommand::Step)
    }
}

/// The six suspects, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonKind {
    Scarlett,
    Mustard,
    White,
    Green,
    Peacock,
    Plum,
}

impl PersonKind {
    pub const ALL: [PersonKind; 6] = [
        PersonKind::Scarlett,
        PersonKind::Mustard,
        PersonKind::White,
        PersonKind::Green,
        PersonKind::Peacock,
        PersonKind::Plum,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PersonKind::Scarlett => "Miss Scarlett",
            PersonKind::Mustard => "Colonel Mustard",
            PersonKind::White => "Mrs. White",
            PersonKind::Green => "Mr. Green",
            PersonKind::Peacock => "Mrs. Peacock",
            PersonKind::Plum => "Professor Plum",
        }
    }

    /// Single-letter board glyph
    pub fn glyph(&self) -> char {
        match self {
            PersonKind::Scarlett => 'S',
            PersonKind::Mustard => 'M',
            PersonKind::White => 'W',
            PersonKind::Green => 'G',
            PersonKind::Peacock => 'E',
            PersonKind::Plum => 'P',
        }
    }

    /// Starting square on the classic board
    pub fn start(&self) -> Position {
        match self {
            PersonKind::Scarlett => Position::new(24, 7),
            PersonKind::Mustard => Position::new(17, 0),
            PersonKind::White => Position::new(0, 9),
            PersonKind::Green => Position::new(0, 14),
            PersonKind::Peacock => Position::new(6, 23),
            PersonKind::Plum => Position::new(19, 23),
        }
    }

    /// Turn-order index (0-5)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeaponKind {
    Candlestick,
    Revolver,
    Spanner,
    Rope,
    Dagger,
    LeadPipe,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 6] = [
        WeaponKind::Candlestick,
        WeaponKind::Revolver,
        WeaponKind::Spanner,
        WeaponKind::Rope,
        WeaponKind::Dagger,
        WeaponKind::LeadPipe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Candlestick => "Candlestick",
            WeaponKind::Revolver => "Revolver",
            WeaponKind::Spanner => "Spanner",
            WeaponKind::Rope => "Rope",
            WeaponKind::Dagger => "Dagger",
            WeaponKind::LeadPipe => "Lead Pipe",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            WeaponKind::Candlestick => 'C',
            WeaponKind::Revolver => 'R',
            WeaponKind::Spanner => 'A',
            WeaponKind::Rope => 'O',
            WeaponKind::Dagger => 'D',
            WeaponKind::LeadPipe => 'L',
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine rooms and the letters that mark their squares in a layout.
///
/// | Room | Letter |
/// |------|--------|
/// | Kitchen | `K` |
/// | Ballroom | `A` |
/// | Conservatory | `C` |
/// | Billiard Room | `O` |
/// | Library | `L` |
/// | Study | `S` |
/// | Hall | `X` |
/// | Lounge | `U` |
/// | Dining Room | `I` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoomKind {
    Kitchen,
    Ballroom,
    Conservatory,
    BilliardRoom,
    Library,
    Study,
    Hall,
    Lounge,
    DiningRoom,
}

impl RoomKind {
    pub const ALL: [RoomKind; 9] = [
        RoomKind::Kitchen,
        RoomKind::Ballroom,
        RoomKind::Conservatory,
        RoomKind::BilliardRoom,
        RoomKind::Library,
        RoomKind::Study,
        RoomKind::Hall,
        RoomKind::Lounge,
        RoomKind::DiningRoom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RoomKind::Kitchen => "Kitchen",
            RoomKind::Ballroom => "Ballroom",
            RoomKind::Conservatory => "Conservatory",
            RoomKind::BilliardRoom => "Billiard Room",
            RoomKind::Library => "Library",
            RoomKind::Study => "Study",
            RoomKind::Hall => "Hall",
            RoomKind::Lounge => "Lounge",
            RoomKind::DiningRoom => "Dining Room",
        }
    }

    /// Layout letter for this room's squares
    pub fn letter(&self) -> char {
        match self {
            RoomKind::Kitchen => 'K',
            RoomKind::Ballroom => 'A',
            RoomKind::Conservatory => 'C',
            RoomKind::BilliardRoom => 'O',
            RoomKind::Library => 'L',
            RoomKind::Study => 'S',
            RoomKind::Hall => 'X',
            RoomKind::Lounge => 'U',
            RoomKind::DiningRoom => 'I',
        }
    }

    /// Parse a layout letter (case-sensitive, uppercase only)
    pub fn from_letter(ch: char) -> Option<Self> {
        RoomKind::ALL.into_iter().find(|room| room.letter() == ch)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that occupies a square: a suspect token or a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovableItem {
    Person(PersonKind),
    Weapon(WeaponKind),
}

impl MovableItem {
    pub fn name(&self) -> &'static str {
        match self {
            MovableItem::Person(p) => p.name(),
            MovableItem::Weapon(w) => w.name(),
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            MovableItem::Person(p) => p.glyph(),
            MovableItem::Weapon(w) => w.glyph(),
        }
    }
}

impl From<PersonKind> for MovableItem {
    fn from(p: PersonKind) -> Self {
        MovableItem::Person(p)
    }
}

impl From<WeaponKind> for MovableItem {
    fn from(w: WeaponKind) -> Self {
        MovableItem::Weapon(w)
    }
}

impl fmt::Display for MovableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card. Each card names exactly one person, weapon or room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    Person(PersonKind),
    Weapon(WeaponKind),
    Room(RoomKind),
}

impl Card {
    /// Number of cards in a full deck (6 + 6 + 9)
    pub const DECK_SIZE: usize = 21;

    pub fn name(&self) -> &'static str {
        match self {
            Card::Person(p) => p.name(),
            Card::Weapon(w) => w.name(),
            Card::Room(r) => r.name(),
        }
    }

    /// Every card, grouped persons, weapons, rooms.
    pub fn all() -> impl Iterator<Item = Card> {
        PersonKind::ALL
            .into_iter()
            .map(Card::Person)
            .chain(WeaponKind::ALL.into_iter().map(Card::Weapon))
            .chain(RoomKind::ALL.into_iter().map(Card::Room))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_index_roundtrip_at_corners() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(0, 23).index(), 23);
        assert_eq!(Position::new(1, 0).index(), 24);
        assert_eq!(Position::new(24, 23).index(), BOARD_CELLS - 1);
        assert_eq!(Position::from_index(BOARD_CELLS - 1), Some(Position::new(24, 23)));
        assert_eq!(Position::from_index(BOARD_CELLS), None);
    }

    #[test]
    fn step_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Right), Some(Position::new(0, 1)));
        assert_eq!(corner.step(Direction::Down), Some(Position::new(1, 0)));

        let far = Position::new(24, 23);
        assert_eq!(far.step(Direction::Down), None);
        assert_eq!(far.step(Direction::Right), None);
    }

    #[test]
    fn move_tokens() {
        assert_eq!(MoveCommand::from_str("a"), Some(MoveCommand::Step(Direction::Left)));
        assert_eq!(MoveCommand::from_str("D"), Some(MoveCommand::Step(Direction::Right)));
        assert_eq!(MoveCommand::from_str(" s "), Some(MoveCommand::Step(Direction::Down)));
        assert_eq!(MoveCommand::from_str("x"), Some(MoveCommand::Finish));
        assert_eq!(MoveCommand::from_str("q"), None);
    }

    #[test]
    fn glyphs_are_unique_across_items() {
        let mut glyphs: Vec<char> = PersonKind::ALL
            .iter()
            .map(|p| p.glyph())
            .chain(WeaponKind::ALL.iter().map(|w| w.glyph()))
            .collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 12);
    }

    #[test]
    fn room_letters_roundtrip() {
        for room in RoomKind::ALL {
            assert_eq!(RoomKind::from_letter(room.letter()), Some(room));
        }
        assert_eq!(RoomKind::from_letter('H'), None);
        assert_eq!(RoomKind::from_letter('B'), None);
    }

    #[test]
    fn deck_has_21_distinct_cards() {
        let mut cards: Vec<Card> = Card::all().collect();
        assert_eq!(cards.len(), Card::DECK_SIZE);
        cards.sort();
        cards.dedup();
        assert_eq!(cards.len(), Card::DECK_SIZE);
    }
}
