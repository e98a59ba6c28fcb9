//! Error types for board operations.
//!
//! Move errors signal that a caller bypassed move generation; they are surfaced,
//! never retried.

use thiserror::Error;

use super::model::{Color, Field};

/// Errors raised by [`Board::perform_move`](super::Board::perform_move).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square of the move holds no piece
    #[error("No piece at source square {square}")]
    EmptySourceSquare { square: Field },

    /// The moving piece does not belong to the side to move
    #[error("Piece at square {square} belongs to {color}, but it is {turn}'s turn")]
    WrongTurnMove { square: Field, color: Color, turn: Color },

    /// One of the move's coordinates lies outside the 8x8 grid
    #[error("Square {square} is off the board")]
    OffBoard { square: Field },
}

/// Errors raised while parsing user-facing names and squares.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Unknown ruleset: {0} (expected chess or checkers)")]
    UnknownRuleset(String),

    #[error("Unknown color: {0} (expected red or black)")]
    UnknownColor(String),

    #[error("Invalid move: {0}")]
    InvalidMove(String),
}
