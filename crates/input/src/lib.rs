//! Console input module (engine-facing).
//!
//! Reads answers line by line from any [`std::io::BufRead`] and turns the
//! engine's [`Request`](crate::engine::Request)s into typed
//! [`Answer`](crate::engine::Answer)s. Every answer handed to the engine has
//! already been checked here; bad tokens are asked again.

pub mod answer;
pub mod console;
pub mod map;

pub use cluedo_engine as engine;
pub use cluedo_types as types;

pub use answer::answer;
pub use console::Console;
pub use map::{parse_move, parse_number, parse_yes_no};
