pub mod error;
pub use error::{MoveError, ParseError};
pub mod model;
pub use model::{CheckersKind, ChessKind, Color, Field, GameState, Move, Piece, PieceKind, Ruleset, Square};

mod board;
mod checkers_moves;
mod chess_moves;
mod move_generation;
mod rules;
#[cfg(test)]
pub mod test_utils;
pub use board::{make_board, Board};
