//! Rules engine and search for a game where each side plays by chess or by
//! checkers rules on a shared 8x8 board.
//!
//! Boards are immutable values: [`Board::perform_move`] returns a new board and
//! leaves its input untouched. Moves are generated per square with
//! [`Board::legal_moves_for_square`] or for the whole board with
//! [`Board::legal_moves_for_board`]; [`get_best_move`] runs a depth-bounded
//! alpha-beta search over them.

pub mod boards;
pub mod config;
pub mod engines;

pub use boards::board::{make_board, Board, Color, Field, Move, MoveError, ParseError, Piece, PieceKind, Ruleset};
pub use engines::engine_alpha_beta::{get_best_move, SearchResult};
pub use engines::evaluation::rate_board;
