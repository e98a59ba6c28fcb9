pub mod board;
pub mod perft;
