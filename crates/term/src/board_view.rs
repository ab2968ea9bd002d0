//! BoardView: maps a `core::Board` into a framebuffer.
//!
//! Each square is three columns wide with one separator column between
//! neighbours, and one separator row between board rows:
//!
//! - `@` walls off anything that cannot be crossed
//! - `|` and `---` mark squares a token can walk between, including a door
//!   and any room square beside it, whichever room the door belongs to
//! - squares of the same room run together with no separator
//!
//! A key of the character and weapon glyphs sits to the right.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, TileKind};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    MovableItem, PersonKind, Position, RoomKind, WeaponKind, BOARD_COLS, BOARD_ROWS,
};

/// Columns taken by the board drawing
pub const BOARD_TEXT_WIDTH: u16 = BOARD_COLS as u16 * 4 + 1;
/// Rows taken by the board drawing
pub const BOARD_TEXT_HEIGHT: u16 = BOARD_ROWS as u16 * 2 + 1;

const KEY_GAP: u16 = 7;
const KEY_WIDTH: u16 = 25;

/// What lies between two neighbouring squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Edge {
    /// Both sides are off the board or blocked.
    Nothing,
    /// Inside one room.
    Open,
    /// A step is possible.
    Thin,
    Wall,
}

/// How a square counts when drawing its edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Outside,
    Walkway,
    Door(RoomKind),
    Room(RoomKind),
}

fn region(board: &Board, row: i16, col: i16) -> Region {
    if row < 0 || col < 0 {
        return Region::Outside;
    }
    let Some(tile) = board.tile(Position::new(row as u8, col as u8)) else {
        return Region::Outside;
    };
    match tile.kind() {
        TileKind::Blocked => Region::Outside,
        TileKind::Hallway => Region::Walkway,
        TileKind::Door { room, .. } => Region::Door(room),
        TileKind::RoomCell { room } => Region::Room(room),
    }
}

fn edge(a: Region, b: Region) -> Edge {
    use Region::*;
    match (a, b) {
        (Outside, Outside) => Edge::Nothing,
        (Outside, _) | (_, Outside) => Edge::Wall,
        (Room(x), Room(y)) if x == y => Edge::Open,
        (Walkway | Door(_), Walkway | Door(_)) => Edge::Thin,
        (Door(_), Room(_)) | (Room(_), Door(_)) => Edge::Thin,
        _ => Edge::Wall,
    }
}

/// Colours for the board drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub wall: CellStyle,
    pub separator: CellStyle,
    pub door: CellStyle,
    pub label: CellStyle,
    pub weapon: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: CellStyle::fg(Rgb::new(150, 110, 70)),
            separator: CellStyle::fg(Rgb::new(90, 90, 90)).dim(),
            door: CellStyle::fg(Rgb::new(240, 200, 80)),
            label: CellStyle::fg(Rgb::new(200, 200, 220)).bold(),
            weapon: CellStyle::fg(Rgb::new(180, 180, 190)).bold(),
        }
    }
}

/// Token colours, following the character names.
pub fn person_style(person: PersonKind) -> CellStyle {
    let rgb = match person {
        PersonKind::Scarlett => Rgb::new(230, 40, 40),
        PersonKind::Mustard => Rgb::new(230, 190, 30),
        PersonKind::White => Rgb::new(245, 245, 245),
        PersonKind::Green => Rgb::new(40, 190, 80),
        PersonKind::Peacock => Rgb::new(60, 110, 240),
        PersonKind::Plum => Rgb::new(170, 70, 200),
    };
    CellStyle::fg(rgb).bold()
}

/// Renders the board and its key.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    palette: Palette,
}

impl BoardView {
    /// Framebuffer wide enough for the board and the key
    pub fn framebuffer() -> FrameBuffer {
        FrameBuffer::new(BOARD_TEXT_WIDTH + KEY_GAP + KEY_WIDTH, BOARD_TEXT_HEIGHT)
    }

    /// Draw `board` into `fb`, starting at the top-left corner.
    pub fn render_into(&self, board: &Board, fb: &mut FrameBuffer) {
        let rows = BOARD_ROWS as i16;
        let cols = BOARD_COLS as i16;

        for r in 0..=rows {
            for c in 0..=cols {
                let (x, y) = (c as u16 * 4, r as u16 * 2);
                self.draw_corner(board, r, c, fb);

                // separator above square (r, c)
                if c < cols {
                    let e = edge(region(board, r - 1, c), region(board, r, c));
                    let (text, style) = match e {
                        Edge::Wall => ("@@@", self.palette.wall),
                        Edge::Thin => ("---", self.palette.separator),
                        Edge::Open | Edge::Nothing => ("   ", CellStyle::default()),
                    };
                    fb.put_str(x + 1, y, text, style);
                }

                // separator left of square (r, c)
                if r < rows {
                    let e = edge(region(board, r, c - 1), region(board, r, c));
                    let (ch, style) = match e {
                        Edge::Wall => ('@', self.palette.wall),
                        Edge::Thin => ('|', self.palette.separator),
                        Edge::Open | Edge::Nothing => (' ', CellStyle::default()),
                    };
                    fb.put_char(x, y + 1, ch, style);
                }

                if r < rows && c < cols {
                    self.draw_square(board, Position::new(r as u8, c as u8), fb);
                }
            }
        }

        self.draw_labels(board, fb);
        self.draw_key(fb);
    }

    fn draw_square(&self, board: &Board, pos: Position, fb: &mut FrameBuffer) {
        let x = pos.col as u16 * 4 + 2;
        let y = pos.row as u16 * 2 + 1;
        let Some(tile) = board.tile(pos) else {
            return;
        };
        let (ch, style) = match (tile.occupant(), tile.kind()) {
            (Some(item), _) => (item.glyph(), self.item_style(item)),
            (None, TileKind::Door { index, .. }) => {
                (char::from_digit(index as u32, 10).unwrap_or('?'), self.palette.door)
            }
            (None, _) => (' ', CellStyle::default()),
        };
        fb.put_char(x, y, ch, style);
    }

    fn draw_corner(&self, board: &Board, r: i16, c: i16, fb: &mut FrameBuffer) {
        // the four squares meeting at the corner, clockwise from top-left
        let tl = region(board, r - 1, c - 1);
        let tr = region(board, r - 1, c);
        let br = region(board, r, c);
        let bl = region(board, r, c - 1);

        let horizontal = edge(tl, bl).max(edge(tr, br));
        let vertical = edge(tl, tr).max(edge(bl, br));
        let (ch, style) = if horizontal == Edge::Wall || vertical == Edge::Wall {
            ('@', self.palette.wall)
        } else if horizontal == Edge::Thin {
            ('-', self.palette.separator)
        } else if vertical == Edge::Thin {
            ('|', self.palette.separator)
        } else {
            (' ', CellStyle::default())
        };
        fb.put_char(c as u16 * 4, r as u16 * 2, ch, style);
    }

    /// Room names go on the separator row under the room's top row,
    /// centred, when they fit.
    fn draw_labels(&self, board: &Board, fb: &mut FrameBuffer) {
        for room in board.rooms() {
            let mut cells = board
                .tiles()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.kind() == TileKind::RoomCell { room: room.kind() })
                .filter_map(|(i, _)| Position::from_index(i));
            let Some(top) = cells.next() else {
                continue;
            };
            let last = cells
                .take_while(|p| p.row == top.row)
                .last()
                .unwrap_or(top);

            let label = room.name().to_uppercase();
            let left = top.col as u16 * 4 + 1;
            let span = (last.col - top.col) as u16 * 4 + 3;
            let len = label.chars().count() as u16;
            if len <= span && top.row + 1 < BOARD_ROWS {
                let x = left + (span - len) / 2;
                fb.put_str(x, (top.row as u16 + 1) * 2, &label, self.palette.label);
            }
        }
    }

    fn draw_key(&self, fb: &mut FrameBuffer) {
        let x = BOARD_TEXT_WIDTH + KEY_GAP;
        let border = "*".repeat(KEY_WIDTH as usize);
        let mut y = 1;

        fb.put_str(x, y, &border, CellStyle::default());
        y += 1;
        fb.put_str(x, y, &key_line("         KEY"), CellStyle::default());
        y += 1;

        let items = PersonKind::ALL
            .into_iter()
            .map(MovableItem::Person)
            .chain(WeaponKind::ALL.into_iter().map(MovableItem::Weapon));
        for item in items {
            let line = key_line(&format!(" {} - {}", item.glyph(), item.name()));
            fb.put_str(x, y, &line, CellStyle::default());
            fb.put_char(x + 3, y, item.glyph(), self.item_style(item));
            y += 1;
        }
        fb.put_str(x, y, &border, CellStyle::default());
    }

    fn item_style(&self, item: MovableItem) -> CellStyle {
        match item {
            MovableItem::Person(p) => person_style(p),
            MovableItem::Weapon(_) => self.palette.weapon,
        }
    }
}

/// `*  text   *`, padded to the key width
fn key_line(text: &str) -> String {
    let inner = KEY_WIDTH as usize - 3;
    format!("* {:<inner$}*", text, inner = inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn rendered(board: &Board) -> FrameBuffer {
        let mut fb = BoardView::framebuffer();
        BoardView::default().render_into(board, &mut fb);
        fb
    }

    #[test]
    fn test_edges() {
        use crate::types::RoomKind::{Hall, Kitchen};
        assert_eq!(edge(Region::Outside, Region::Outside), Edge::Nothing);
        assert_eq!(edge(Region::Outside, Region::Walkway), Edge::Wall);
        assert_eq!(edge(Region::Walkway, Region::Door(Hall)), Edge::Thin);
        assert_eq!(edge(Region::Room(Hall), Region::Room(Hall)), Edge::Open);
        assert_eq!(edge(Region::Room(Hall), Region::Room(Kitchen)), Edge::Wall);
        assert_eq!(edge(Region::Door(Hall), Region::Room(Hall)), Edge::Thin);
        assert_eq!(edge(Region::Door(Kitchen), Region::Room(Hall)), Edge::Thin);
        assert_eq!(edge(Region::Walkway, Region::Room(Hall)), Edge::Wall);
    }

    #[test]
    fn test_token_glyphs_land_on_their_squares() {
        let mut board = Board::classic().unwrap();
        board.place_people().unwrap();
        let fb = rendered(&board);

        for person in PersonKind::ALL {
            let at = person.start();
            let cell = fb.get(at.col as u16 * 4 + 2, at.row as u16 * 2 + 1).unwrap();
            assert_eq!(cell.ch, person.glyph());
            assert_eq!(cell.style, person_style(person));
        }
    }

    #[test]
    fn test_outer_frame() {
        let board = Board::setup(&mut GameRng::new(5)).unwrap();
        let fb = rendered(&board);
        let text = fb.to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), BOARD_TEXT_HEIGHT as usize);
        // bottom-left corner of the Lounge
        assert_eq!(fb.get(0, BOARD_TEXT_HEIGHT - 1).unwrap().ch, '@');
        assert!(text.contains("KITCHEN"));
        assert!(text.contains("DINING ROOM"));
        assert!(text.contains("KEY"));
        assert!(text.contains("L - Lead Pipe"));
    }

    #[test]
    fn test_hallway_squares_are_thinly_separated() {
        let board = Board::classic().unwrap();
        let fb = rendered(&board);
        // (7, 1) and (7, 2) are both hallway
        assert_eq!(fb.get(8, 15).unwrap().ch, '|');
        // (6, 6) above (7, 6): both hallway
        assert_eq!(fb.row_text(14).get(25..28), Some("---"));
    }

    #[test]
    fn test_door_opens_onto_the_neighbouring_room() {
        let board = Board::classic().unwrap();
        let fb = rendered(&board);
        // Library door at (13, 20) under Billiard Room square (12, 20)
        assert_eq!(fb.row_text(26).get(81..84), Some("---"));
        // and over Library square (14, 20)
        assert_eq!(fb.row_text(28).get(81..84), Some("---"));
    }

    #[test]
    fn test_doors_show_their_index() {
        let board = Board::classic().unwrap();
        let fb = rendered(&board);
        // Kitchen door 1 at (7, 4)
        assert_eq!(fb.get(4 * 4 + 2, 7 * 2 + 1).unwrap().ch, '1');
    }
}
