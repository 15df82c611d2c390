//! Errors used throughout the engine.
//!
//! `InvalidMove` is the single error kind raised by the board model. Every
//! variant names one legality violation and renders a message suitable for
//! showing to a human at the prompt. An `InvalidMove` raised while applying an
//! engine's choice surfaces as `EngineError::InvalidMove` and ends the game.
//!
//! `MoveParseError` covers malformed text and never leaves the interactive
//! input boundary.

use crate::game_state::rudder_types::Side;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("This space ({x}, {y}) is out of bounds!")]
    OutOfBounds { x: i32, y: i32 },

    #[error("This space ({x}, {y}) is already taken!")]
    Occupied { x: i32, y: i32 },

    #[error("The piece to move at ({x}, {y}) is out of bounds!")]
    SourceOutOfBounds { x: i32, y: i32 },

    #[error("The piece at ({x}, {y}) is not yours!")]
    NotOwnPiece { x: i32, y: i32 },

    #[error("Pieces can only move 1 space vertically, diagonally, or horizontally!")]
    ShiftTooFar,

    #[error("No more piece shifts remain!")]
    NoShiftsLeft,

    #[error("No more pieces remain for {side:?}!")]
    NoPiecesLeft { side: Side },

    #[error("A turn can only be skipped when no move is available!")]
    PassWithLegalMoves,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("expected 2 or 4 coordinates, got {0}")]
    WrongArity(usize),

    #[error("invalid column '{0}'")]
    InvalidColumn(String),

    #[error("invalid row '{0}'")]
    InvalidRow(String),
}

/// Failures of a move-selection strategy.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no legal move is available for {0:?}")]
    NoLegalMoves(Side),

    #[error("the game is already decided")]
    GameOver,

    #[error("move input closed")]
    InputClosed,

    #[error("engine produced an invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
