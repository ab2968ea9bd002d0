//! Terminal board display module.
//!
//! Draws the board as walled ASCII art into a simple framebuffer, then
//! flushes it to a terminal with or without colour. Engine events are
//! turned into one line of narration each.
//!
//! - [`board_view`]: pure mapping from `core::Board` to a framebuffer
//! - [`narrate`]: event descriptions
//! - [`renderer`]: crossterm output

pub mod board_view;
pub mod fb;
pub mod narrate;
pub mod renderer;

pub use cluedo_engine as engine;
pub use cluedo_engine::core;
pub use cluedo_types as types;

pub use board_view::{person_style, BoardView, Palette, BOARD_TEXT_HEIGHT, BOARD_TEXT_WIDTH};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use narrate::describe;
pub use renderer::{encode_full_into, encode_plain_into, TerminalRenderer};
