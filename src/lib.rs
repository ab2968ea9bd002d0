//! Cluedo (workspace facade crate).
//!
//! Re-exports the member crates as `cluedo::{core,engine,input,term,types}` so
//! the binary, tests and benches share one set of paths while the
//! implementation lives in dedicated crates under `crates/`.

pub use cluedo_core as core;
pub use cluedo_engine as engine;
pub use cluedo_input as input;
pub use cluedo_term as term;
pub use cluedo_types as types;
