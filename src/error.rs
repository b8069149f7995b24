//! Error types

use crate::board::{Pos, Stone};
use thiserror::Error;

/// A move that the rules do not allow.
///
/// Returned by [`crate::GameSession::place`]; the session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("position {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },
    #[error("position {0} is already occupied")]
    CellOccupied(Pos),
    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Stone, got: Stone },
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Invalid game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is too small, need at least {min}")]
    BoardTooSmall { size: usize, min: usize },
    #[error("board size {size} is too large, at most {max} is supported")]
    BoardTooLarge { size: usize, max: usize },
    #[error("{0} cannot be assigned to a player")]
    InvalidPlayer(Stone),
}
