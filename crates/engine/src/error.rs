use thiserror::Error;

use crate::core::{BoardError, RoomFullError};
use crate::protocol::Answer;

/// Errors from driving a [`Game`](crate::Game).
///
/// `UnexpectedAnswer` and the lifecycle variants are caller bugs: the input
/// layer answered something the engine did not ask for. The board variants
/// are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game has not started")]
    NotStarted,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("the game is over")]
    GameOver,

    #[error("no players at the table")]
    NoPlayers,

    #[error("expected {expected}, got {got:?}")]
    UnexpectedAnswer { expected: &'static str, got: Answer },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    RoomFull(#[from] RoomFullError),
}
